//! Prompts for review and market-news analysis

use crate::model::AnalysisKind;

/// System instruction for review sentiment
pub const SENTIMENT_SYSTEM_PROMPT: &str = "あなたは与えられたテキストの感情を分析する専門家です。感情は「ポジティブ」「ネガティブ」「ニュートラル」のいずれかで判断し、その感情スコア（0から10の範囲、10が最もポジティブ、5がニュートラル、0が最もネガティブ）と、その判断に至った理由を簡潔に日本語で説明してください。**必ず次の正確なJSON形式のみで回答してください。他のテキストは一切含めないでください**：{\"sentiment\": \"感情\", \"score\": スコア, \"reason\": \"理由\"}";

/// System instruction for news summaries (free text reply)
pub const SUMMARY_SYSTEM_PROMPT: &str = "あなたは与えられたテキストを簡潔かつ網羅的に要約する専門家です。重要なポイントを抽出し、読みやすい形式で要約を生成してください。";

/// System instruction for keyword extraction
pub const KEYWORDS_SYSTEM_PROMPT: &str = "あなたは与えられたテキストから主要なキーワードを抽出する専門家です。最大5つのキーワードを抽出し、**必ず次の正確なJSON形式のみで回答してください。他のテキストは一切含めないでください**：{\"keywords\": [\"キーワード1\", \"キーワード2\", \"キーワード3\"]}";

/// System instruction for business impact scoring
pub const BUSINESS_IMPACT_SYSTEM_PROMPT: &str = "あなたは企業戦略のビジネス分析専門家です。与えられた市場ニュースから、1)市場機会スコア（1-10、新規事業機会の可能性）、2)競合脅威レベル（1-10、競合からの脅威度）、3)投資優先度（1-10、投資検討の優先度）を分析してください。**必ず次の正確なJSON形式のみで回答してください**：{\"market_opportunity\": スコア, \"threat_level\": スコア, \"investment_priority\": スコア, \"business_impact\": \"簡潔な分析理由\"}";

pub fn system_prompt(kind: AnalysisKind) -> &'static str {
    match kind {
        AnalysisKind::Sentiment => SENTIMENT_SYSTEM_PROMPT,
        AnalysisKind::Summary => SUMMARY_SYSTEM_PROMPT,
        AnalysisKind::Keywords => KEYWORDS_SYSTEM_PROMPT,
        AnalysisKind::BusinessImpact => BUSINESS_IMPACT_SYSTEM_PROMPT,
    }
}

/// Build the user prompt for `kind` around the caller's text
pub fn build_prompt(kind: AnalysisKind, text: &str) -> String {
    match kind {
        AnalysisKind::Sentiment => {
            format!("以下のレビューの感情を分析してください。\n\nレビュー: {text}")
        }
        AnalysisKind::Summary => {
            format!("以下のニュース記事を要約してください。\n\n記事: {text}")
        }
        AnalysisKind::Keywords => {
            format!("以下のテキストから主要なキーワードを抽出してください。\n\nテキスト: {text}")
        }
        AnalysisKind::BusinessImpact => {
            format!("以下の市場ニュースをビジネス視点で分析してください。\n\nニュース: {text}")
        }
    }
}
