mod short_url;

pub use short_url::{
    form_handler, form_post_handler, method_not_allowed_handler, redirect_handler,
    short_prefix_handler, shorten_handler,
};
