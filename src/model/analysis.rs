//! Analysis request, result schemas and normalized results

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Body of every analysis endpoint
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AnalysisRequest {
    /// Free text to analyze (review body or news article)
    pub text: String,
}

/// The four analyses the service can run against the language model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    Sentiment,
    Summary,
    Keywords,
    BusinessImpact,
}

impl AnalysisKind {
    /// Result schema the model reply is normalized against
    pub fn schema(self) -> &'static ResultSchema {
        match self {
            AnalysisKind::Sentiment => &SENTIMENT_SCHEMA,
            AnalysisKind::Summary => &SUMMARY_SCHEMA,
            AnalysisKind::Keywords => &KEYWORDS_SCHEMA,
            AnalysisKind::BusinessImpact => &BUSINESS_IMPACT_SCHEMA,
        }
    }

    /// Whether the model is asked for JSON.
    /// Summaries are free text and skip normalization.
    pub fn expects_json(self) -> bool {
        !matches!(self, AnalysisKind::Summary)
    }

    /// Human-readable label used in upstream failure messages
    pub fn label(self) -> &'static str {
        match self {
            AnalysisKind::Sentiment => "Sentiment analysis",
            AnalysisKind::Summary => "Text summarization",
            AnalysisKind::Keywords => "Keyword extraction",
            AnalysisKind::BusinessImpact => "Business analysis",
        }
    }

    /// Short name for log fields
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisKind::Sentiment => "sentiment",
            AnalysisKind::Summary => "summary",
            AnalysisKind::Keywords => "keywords",
            AnalysisKind::BusinessImpact => "business_impact",
        }
    }
}

impl std::fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placeholder substituted for a field the model left out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Text(&'static str),
    Float(f64),
    Integer(i64),
    EmptyList,
}

impl FieldDefault {
    pub fn to_value(self) -> Value {
        match self {
            FieldDefault::Text(s) => Value::String(s.to_string()),
            FieldDefault::Float(n) => Value::from(n),
            FieldDefault::Integer(n) => Value::from(n),
            FieldDefault::EmptyList => Value::Array(Vec::new()),
        }
    }
}

/// A required result field and its default
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub default: FieldDefault,
}

/// Where the parse-failure note goes and what it says
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticSpec {
    pub field: &'static str,
    pub message: &'static str,
}

/// Ordered set of required fields for one analysis kind
#[derive(Debug)]
pub struct ResultSchema {
    pub fields: &'static [FieldSpec],
    /// `None` for kinds whose replies are never parsed
    pub diagnostic: Option<DiagnosticSpec>,
}

impl ResultSchema {
    /// Every field set to its default, in schema order
    pub fn defaults(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|spec| (spec.name.to_string(), spec.default.to_value()))
            .collect()
    }

    #[cfg(test)]
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|spec| spec.name)
    }
}

pub const SENTIMENT_SCHEMA: ResultSchema = ResultSchema {
    fields: &[
        FieldSpec {
            name: "sentiment",
            default: FieldDefault::Text("ニュートラル"),
        },
        FieldSpec {
            name: "score",
            default: FieldDefault::Float(0.0),
        },
        FieldSpec {
            name: "reason",
            default: FieldDefault::Text("分析に問題がありました"),
        },
    ],
    diagnostic: Some(DiagnosticSpec {
        field: "reason",
        message: "分析結果の解析に失敗しました",
    }),
};

pub const SUMMARY_SCHEMA: ResultSchema = ResultSchema {
    fields: &[FieldSpec {
        name: "summary",
        default: FieldDefault::Text(""),
    }],
    diagnostic: None,
};

pub const KEYWORDS_SCHEMA: ResultSchema = ResultSchema {
    fields: &[FieldSpec {
        name: "keywords",
        default: FieldDefault::EmptyList,
    }],
    diagnostic: Some(DiagnosticSpec {
        field: "error",
        message: "キーワード抽出結果の解析に失敗しました",
    }),
};

pub const BUSINESS_IMPACT_SCHEMA: ResultSchema = ResultSchema {
    fields: &[
        FieldSpec {
            name: "market_opportunity",
            default: FieldDefault::Integer(5),
        },
        FieldSpec {
            name: "threat_level",
            default: FieldDefault::Integer(5),
        },
        FieldSpec {
            name: "investment_priority",
            default: FieldDefault::Integer(5),
        },
        FieldSpec {
            name: "business_impact",
            default: FieldDefault::Text("分析結果が不完全でした"),
        },
    ],
    diagnostic: Some(DiagnosticSpec {
        field: "business_impact",
        message: "ビジネス分析結果の解析に失敗しました",
    }),
};

/// Schema-complete analysis result
///
/// Serializes as a flat JSON object. `degraded` is set when the model reply
/// could not be parsed and the fields are defaults plus a diagnostic note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResult {
    #[serde(flatten)]
    fields: Map<String, Value>,
    #[serde(skip)]
    degraded: bool,
}

impl NormalizedResult {
    pub fn complete(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            degraded: false,
        }
    }

    pub fn degraded(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            degraded: true,
        }
    }

    /// Summary results carry the model reply as-is
    pub fn summary(text: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("summary".to_string(), Value::String(text.to_string()));
        Self::complete(fields)
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    #[cfg(test)]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    #[cfg(test)]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}
