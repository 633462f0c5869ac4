use chrono::{DateTime, FixedOffset, Offset as _, Utc};

use crate::entities::{Locale, TextKey};

use super::translations::{translate, Dictionary};

/// What every view needs besides the data: language and the wall-clock
/// offset timestamps are shown in.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub dictionary: Dictionary,
    pub utc_offset: FixedOffset,
}

impl ViewContext {
    pub fn new(locale: Locale, utc_offset: FixedOffset) -> Self {
        Self {
            dictionary: translate(locale),
            utc_offset,
        }
    }

    pub fn t(&self, key: TextKey) -> &'static str {
        self.dictionary.get(key)
    }

    pub(crate) fn clock_time(&self, ts: &DateTime<Utc>) -> String {
        ts.with_timezone(&self.utc_offset).format("%H:%M").to_string()
    }

    pub(crate) fn calendar_date(&self, ts: &DateTime<Utc>) -> String {
        ts.with_timezone(&self.utc_offset)
            .format("%d/%m/%Y")
            .to_string()
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(Locale::English, Utc.fix())
    }
}
