//! Presentation state for on-screen navigation.
//!
//! Owned by whichever collaborator renders the deck and passed around
//! explicitly. The parser itself keeps no state.

use crate::types::Slide;
use crate::{Error, Result};

/// The slides being presented and which one is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    slides: Vec<Slide>,
    current: usize,
}

impl PresentationState {
    /// Start presenting from the first slide.
    ///
    /// An empty list is replaced by a single empty slide so there is always
    /// something to show.
    pub fn new(slides: Vec<Slide>) -> Self {
        let slides = if slides.is_empty() {
            vec![Slide::new()]
        } else {
            slides
        };

        Self { slides, current: 0 }
    }

    /// The slide currently showing.
    pub fn current(&self) -> &Slide {
        &self.slides[self.current]
    }

    /// 0-based index of the current slide.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Never true for a state built with [`PresentationState::new`].
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Current position as (1-based slide number, total), for "3 / 10" counters.
    pub fn position(&self) -> (usize, usize) {
        (self.current + 1, self.slides.len())
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.slides.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    /// Advance one slide. Returns false at the last slide.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one slide. Returns false at the first slide.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a 0-based slide index.
    pub fn go_to(&mut self, index: usize) -> Result<&Slide> {
        if index >= self.slides.len() {
            return Err(Error::SlideOutOfRange {
                index,
                total: self.slides.len(),
            });
        }

        self.current = index;
        Ok(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_slides;

    fn three_slides() -> PresentationState {
        PresentationState::new(parse_slides("One\n---\nTwo\n---\nThree"))
    }

    #[test]
    fn test_starts_at_first_slide() {
        let state = three_slides();

        assert_eq!(state.len(), 3);
        assert_eq!(state.position(), (1, 3));
        assert_eq!(state.current().title.as_deref(), Some("One"));
        assert!(!state.has_previous());
        assert!(state.has_next());
    }

    #[test]
    fn test_next_and_previous_stop_at_ends() {
        let mut state = three_slides();

        assert!(state.next());
        assert!(state.next());
        assert!(!state.next());
        assert_eq!(state.position(), (3, 3));

        assert!(state.previous());
        assert!(state.previous());
        assert!(!state.previous());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_go_to() {
        let mut state = three_slides();

        let slide = state.go_to(2).unwrap();
        assert_eq!(slide.title.as_deref(), Some("Three"));
        assert_eq!(state.current_index(), 2);

        let err = state.go_to(3).unwrap_err();
        assert!(matches!(err, Error::SlideOutOfRange { index: 3, total: 3 }));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn test_empty_list_gets_placeholder_slide() {
        let state = PresentationState::new(Vec::new());

        assert_eq!(state.len(), 1);
        assert!(!state.is_empty());
        assert!(state.current().is_empty());
        assert!(!state.has_next());
    }
}
