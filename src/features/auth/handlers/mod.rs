pub mod auth_handler;

pub use auth_handler::{
    __path_get_me, __path_login, __path_login_with_google, __path_logout, __path_register, get_me,
    login, login_with_google, logout, register,
};
