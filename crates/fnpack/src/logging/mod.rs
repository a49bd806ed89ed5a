pub use self::logger::{
    log_copy, log_error, log_info, log_link, log_package, log_section, log_success, log_warning,
};

mod logger;
