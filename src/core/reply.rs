//! Reply formatting
//!
//! Renders lookup outcomes as the Arabic chat replies shown to customers.

use crate::catalog::CatalogRow;
use crate::core::lookup::LookupOutcome;
use serde::{Deserialize, Serialize};

pub const WELCOME: &str = "أهلاً! كيف يمكنني مساعدتك؟";
pub const NOT_FOUND: &str = "❌ المنتج غير موجود في قاعدة البيانات.";

/// Result handed to the boundary layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QueryReply {
    Reply { text: String },
    /// Not a chat reply; the boundary picks the status code
    Error { detail: String },
}

impl QueryReply {
    fn text(text: impl Into<String>) -> Self {
        QueryReply::Reply { text: text.into() }
    }
}

/// Render an outcome
pub fn render(outcome: &LookupOutcome) -> QueryReply {
    match outcome {
        LookupOutcome::Greeting => QueryReply::text(WELCOME),
        LookupOutcome::ExactHit { row } if row.in_stock() => QueryReply::text(format!(
            "✔ المنتج متوفر\n\n📌 الاسم: {}\n💰 السعر: {}$\n📦 المتوفر: {}",
            row.name, row.price, row.stock
        )),
        LookupOutcome::ExactHit { row } => {
            QueryReply::text(format!("❌ المنتج **{}** غير متوفر حالياً.", row.name))
        }
        LookupOutcome::Alternatives { rows } => QueryReply::text(format!(
            "❌ المنتج غير موجود.\n\n🔄 بدائل قريبة:\n{}",
            alternatives_list(rows)
        )),
        LookupOutcome::NoMatch => QueryReply::text(NOT_FOUND),
        LookupOutcome::FetchError { cause } => QueryReply::Error {
            detail: format!("catalog fetch failed: {}", cause),
        },
    }
}

fn alternatives_list(rows: &[CatalogRow]) -> String {
    rows.iter()
        .map(|row| format!("- {} ({}$)", row.name, row.price))
        .collect::<Vec<_>>()
        .join("\n")
}
