mod api;
mod pages;

pub use api::{brands_list, create_account, delete_account, products_list, verify_login};
pub use pages::{home, login, login_form, logout, products, signup};
