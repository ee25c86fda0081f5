pub mod github_login;
pub mod github_login_request;
pub mod logout;
pub mod logout_request;
pub mod token_pair_response;
