use std::rc::Rc;

use yew::Reducible;

pub const AUTOPLAY_INTERVAL_MS: u32 = 4_000;
pub const TRANSITION_MS: u32 = 800;

/// Slide position for the projects carousel.
///
/// Moves are dropped while a transition is running; the view calls
/// [`Carousel::finish_transition`] once the slide animation is done.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    pub current: usize,
    pub len: usize,
    pub animating: bool,
    /// Play/pause toggle in the header.
    pub playing: bool,
    /// Pointer is over the slides.
    pub paused: bool,
    /// Accepted moves so far.
    moves: u64,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len,
            animating: false,
            playing: true,
            paused: false,
            moves: 0,
        }
    }

    /// Returns true when the move was accepted.
    pub fn next(&mut self) -> bool {
        if self.animating || self.len == 0 {
            return false;
        }
        self.current = if self.current + 1 >= self.len { 0 } else { self.current + 1 };
        self.begin_move()
    }

    pub fn prev(&mut self) -> bool {
        if self.animating || self.len == 0 {
            return false;
        }
        self.current = if self.current == 0 { self.len - 1 } else { self.current - 1 };
        self.begin_move()
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if self.animating || index == self.current || index >= self.len {
            return false;
        }
        self.current = index;
        self.begin_move()
    }

    fn begin_move(&mut self) -> bool {
        self.animating = true;
        self.moves = self.moves.wrapping_add(1);
        true
    }

    pub fn finish_transition(&mut self) {
        self.animating = false;
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn autoplay_active(&self) -> bool {
        self.len > 0 && self.playing && !self.paused
    }

    /// Key for the pending autoplay step. It changes on every move, so the
    /// countdown restarts whenever the slide changes, manually or not.
    pub fn autoplay_timer(&self) -> Option<u64> {
        self.autoplay_active().then_some(self.moves)
    }

    /// Fraction of the track shown in the progress bar.
    pub fn progress(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            (self.current + 1) as f64 / self.len as f64
        }
    }
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    FinishTransition,
    TogglePlaying,
    SetPaused(bool),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => {
                next.next();
            }
            CarouselAction::Prev => {
                next.prev();
            }
            CarouselAction::GoTo(index) => {
                next.go_to(index);
            }
            CarouselAction::FinishTransition => next.finish_transition(),
            CarouselAction::TogglePlaying => next.toggle_playing(),
            CarouselAction::SetPaused(paused) => next.set_paused(paused),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// How many times the logo list is repeated so the marquee never shows a gap.
pub fn marquee_repeats(len: usize) -> usize {
    const MIN_LOGOS: usize = 36;
    MIN_LOGOS.div_ceil(len.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap() {
        let mut c = Carousel::new(3);
        assert!(c.prev());
        assert_eq!(c.current, 2);
        c.finish_transition();
        assert!(c.next());
        assert_eq!(c.current, 0);
    }

    #[test]
    fn moves_are_dropped_while_animating() {
        let mut c = Carousel::new(4);
        assert!(c.next());
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.go_to(3));
        assert_eq!(c.current, 1);
        c.finish_transition();
        assert!(c.go_to(3));
        assert_eq!(c.current, 3);
    }

    #[test]
    fn go_to_ignores_current_and_out_of_range() {
        let mut c = Carousel::new(2);
        assert!(!c.go_to(0));
        assert!(!c.go_to(5));
        assert!(!c.animating);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut c = Carousel::new(0);
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.autoplay_active());
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn autoplay_respects_toggle_and_hover() {
        let mut c = Carousel::new(2);
        assert!(c.autoplay_active());
        c.set_paused(true);
        assert!(!c.autoplay_active());
        c.set_paused(false);
        c.toggle_playing();
        assert!(!c.autoplay_active());
    }

    #[test]
    fn manual_move_restarts_autoplay_countdown() {
        let mut c = Carousel::new(3);
        let before = c.autoplay_timer();
        assert!(before.is_some());

        c.next();
        let after_next = c.autoplay_timer();
        assert_ne!(before, after_next);

        // Finishing the transition keeps the running countdown.
        c.finish_transition();
        assert_eq!(c.autoplay_timer(), after_next);

        c.go_to(0);
        assert_ne!(c.autoplay_timer(), after_next);

        c.set_paused(true);
        assert_eq!(c.autoplay_timer(), None);
    }

    #[test]
    fn single_slide_still_restarts_countdown() {
        let mut c = Carousel::new(1);
        let before = c.autoplay_timer();
        assert!(c.next());
        assert_eq!(c.current, 0);
        assert_ne!(c.autoplay_timer(), before);
    }

    #[test]
    fn progress_counts_current_slide() {
        let mut c = Carousel::new(4);
        assert_eq!(c.progress(), 0.25);
        c.go_to(3);
        assert_eq!(c.progress(), 1.0);
    }

    #[test]
    fn reducer_keeps_state_on_rejected_move() {
        let state = Rc::new(Carousel::new(3));
        let moved = state.clone().reduce(CarouselAction::Next);
        assert_eq!(moved.current, 1);
        let rejected = moved.clone().reduce(CarouselAction::GoTo(2));
        assert!(Rc::ptr_eq(&moved, &rejected));
        let finished = rejected.reduce(CarouselAction::FinishTransition);
        assert!(!finished.animating);
        assert_eq!(finished.reduce(CarouselAction::GoTo(2)).current, 2);
    }

    #[test]
    fn marquee_fills_at_least_36_slots() {
        assert_eq!(marquee_repeats(1), 36);
        assert_eq!(marquee_repeats(5), 8);
        assert_eq!(marquee_repeats(36), 1);
        assert_eq!(marquee_repeats(50), 1);
        assert_eq!(marquee_repeats(0), 36);
    }
}
