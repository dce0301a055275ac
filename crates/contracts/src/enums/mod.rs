pub mod order_status;
pub mod package_name;
pub mod payment_method;

pub use order_status::OrderStatus;
pub use package_name::PackageName;
pub use payment_method::PaymentMethod;
