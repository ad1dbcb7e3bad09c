pub mod user;
pub mod upload;
pub mod deposit;
pub mod earning;
pub mod notification;

pub use user::Entity as User;
pub use upload::Entity as Upload;
pub use deposit::Entity as Deposit;
pub use earning::Entity as Earning;
pub use notification::Entity as Notification;
