mod short_url;

pub use short_url::{
    Entry, EntryRow, IndexView, ShortenForm, ShortenedView, SHORT_PATH_PREFIX,
};
