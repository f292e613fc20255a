pub mod calibrate;
pub mod guide;
pub mod info;
pub mod scan;
pub mod solve;
pub mod validate;
