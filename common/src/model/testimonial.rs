use serde::{Deserialize, Serialize};

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub title: String,
    pub company: Option<String>,
    /// Stars out of `MAX_RATING`.
    pub rating: Option<u8>,
    pub image: Option<String>,
    pub project: Option<String>,
}

impl Testimonial {
    /// Quote cut to `max_chars` characters with a trailing `...` when longer.
    pub fn excerpt(&self, max_chars: usize) -> String {
        if self.quote.chars().count() > max_chars {
            let cut: String = self.quote.chars().take(max_chars).collect();
            format!("{}...", cut)
        } else {
            self.quote.clone()
        }
    }

    /// Filled state of each star, `MAX_RATING` entries long. `None` when the
    /// testimonial carries no rating.
    pub fn stars(&self) -> Option<Vec<bool>> {
        self.rating
            .map(|rating| (0..MAX_RATING).map(|i| i < rating).collect())
    }
}
