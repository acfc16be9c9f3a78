pub mod password;
pub mod signin;
pub mod signout;
pub mod signup;
pub mod verification;
