mod category_key;
mod question;

pub use category_key::CategoryKey;
pub use question::{NewQuestion, Question};
