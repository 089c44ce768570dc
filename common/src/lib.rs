pub mod budget;
pub mod logger;
pub mod quotation;

pub use budget::{Budget, BudgetError, DeadlineExceeded};
pub use quotation::{Quotation, QuotationEnvelope};
