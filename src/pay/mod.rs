pub mod afterpay;
pub mod customer;
pub mod ideal;

pub use afterpay::{Afterpay, Article};
pub use customer::{Country, Customer, CustomerCategory, CustomerRole, Language, Salutation};
pub use ideal::Ideal;
