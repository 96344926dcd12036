//! Circular carousel state
//!
//! `Rotator` owns a fixed, non-empty list of items and tracks which one is
//! active, which way the last navigation went and whether the carousel has
//! been scrolled into view. The view layer derives its slide animation from
//! [`Rotator::transition`].

use super::entrance::{EntranceEvent, EntrancePolicy, EntranceTrigger};

/// Horizontal distance a card travels when entering or leaving (px)
pub const SLIDE_DISTANCE_PX: f32 = 200.0;

/// Carousel errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RotatorError {
    #[error("A rotator needs at least one item")]
    Empty,

    #[error("Index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Direction of the most recent navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Sign of the horizontal offset the incoming card starts from
    pub fn entry_sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    /// Sign of the horizontal offset the outgoing card ends at
    pub fn exit_sign(self) -> f32 {
        -self.entry_sign()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

/// Snapshot of the slide animation for the current activation.
///
/// Only changes when the active index changes, so navigation that lands on
/// the card already shown has no visible effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Number of index changes so far, 0 for the initial card
    pub activation: u64,
    /// Index of the card being shown
    pub incoming: usize,
    /// Index of the card being replaced, if the index changed at least once
    pub outgoing: Option<usize>,
    /// Direction of the navigation that produced this activation
    pub direction: Option<Direction>,
}

impl Transition {
    /// Offset (px) the incoming card slides in from
    pub fn enter_offset(&self) -> f32 {
        self.direction
            .map(|d| d.entry_sign() * SLIDE_DISTANCE_PX)
            .unwrap_or(0.0)
    }

    /// Offset (px) the outgoing card slides out to
    pub fn exit_offset(&self) -> f32 {
        self.direction
            .map(|d| d.exit_sign() * SLIDE_DISTANCE_PX)
            .unwrap_or(0.0)
    }
}

/// Carousel state holder
#[derive(Debug, Clone)]
pub struct Rotator<T> {
    items: Vec<T>,
    active_index: usize,
    previous_index: Option<usize>,
    direction: Option<Direction>,
    transition_direction: Option<Direction>,
    activation: u64,
    entrance: EntranceTrigger,
}

impl<T> Rotator<T> {
    /// Create a rotator positioned on the first item
    pub fn new(items: Vec<T>, policy: EntrancePolicy) -> Result<Self, RotatorError> {
        if items.is_empty() {
            return Err(RotatorError::Empty);
        }

        Ok(Self {
            items,
            active_index: 0,
            previous_index: None,
            direction: None,
            transition_direction: None,
            activation: 0,
            entrance: EntranceTrigger::new(policy),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false, kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active(&self) -> &T {
        &self.items[self.active_index]
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// `None` until the first navigation
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_visible(&self) -> bool {
        self.entrance.is_visible()
    }

    pub fn entrance(&self) -> &EntranceTrigger {
        &self.entrance
    }

    /// Advance to the next item, wrapping after the last one
    pub fn next(&mut self) {
        let target = (self.active_index + 1) % self.items.len();
        self.move_to(target, Direction::Forward);
    }

    /// Step back to the previous item, wrapping before the first one
    pub fn previous(&mut self) {
        let len = self.items.len();
        let target = (self.active_index + len - 1) % len;
        self.move_to(target, Direction::Backward);
    }

    /// Jump straight to `index`.
    ///
    /// Direction is `Forward` when `index` lies after the active item and
    /// `Backward` otherwise, including a jump to the active item itself.
    pub fn jump_to(&mut self, index: usize) -> Result<(), RotatorError> {
        if index >= self.items.len() {
            return Err(RotatorError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let direction = if index > self.active_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.move_to(index, direction);
        Ok(())
    }

    /// Forward a visibility report to the entrance trigger
    pub fn on_visibility_change(&mut self, is_visible: bool) -> Option<EntranceEvent> {
        self.entrance.on_visibility_change(is_visible)
    }

    pub fn transition(&self) -> Transition {
        Transition {
            activation: self.activation,
            incoming: self.active_index,
            outgoing: self.previous_index,
            direction: self.transition_direction,
        }
    }

    /// `(index, is_active)` for each indicator dot
    pub fn indicators(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.items.len()).map(move |i| (i, i == self.active_index))
    }

    fn move_to(&mut self, target: usize, direction: Direction) {
        self.direction = Some(direction);
        if target != self.active_index {
            self.previous_index = Some(self.active_index);
            self.active_index = target;
            self.transition_direction = Some(direction);
            self.activation += 1;
        }

        tracing::debug!(
            "Rotator moved {} to {} of {}",
            direction.as_str(),
            self.active_index,
            self.items.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotator(len: usize) -> Rotator<usize> {
        Rotator::new((0..len).collect(), EntrancePolicy::Repeat).unwrap()
    }

    #[test]
    fn test_empty_items_rejected() {
        let result = Rotator::<u8>::new(Vec::new(), EntrancePolicy::FireOnce);
        assert_eq!(result.unwrap_err(), RotatorError::Empty);
    }

    #[test]
    fn test_new_starts_at_zero_with_neutral_direction() {
        let r = rotator(3);
        assert_eq!(r.active_index(), 0);
        assert_eq!(r.direction(), None);
        assert!(!r.is_visible());
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_next_wraps_for_every_length() {
        for n in 1..=6 {
            let mut r = rotator(n);
            for k in 1..=(3 * n) {
                r.next();
                assert_eq!(r.active_index(), k % n, "n={} k={}", n, k);
                assert_eq!(r.direction(), Some(Direction::Forward));
            }
        }
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut r = rotator(4);
        r.previous();
        assert_eq!(r.active_index(), 3);
        assert_eq!(r.direction(), Some(Direction::Backward));
    }

    #[test]
    fn test_previous_undoes_next() {
        for start in 0..5 {
            let mut r = rotator(5);
            r.jump_to(start).unwrap();
            r.next();
            r.previous();
            assert_eq!(r.active_index(), start);
        }
    }

    #[test]
    fn test_single_item_is_idempotent() {
        let mut r = rotator(1);
        r.next();
        assert_eq!(r.active_index(), 0);
        assert_eq!(r.direction(), Some(Direction::Forward));
        r.previous();
        assert_eq!(r.active_index(), 0);
        assert_eq!(r.direction(), Some(Direction::Backward));
        // Index never changed, so there is nothing to animate
        assert_eq!(r.transition().outgoing, None);
        assert_eq!(r.transition().direction, None);
        assert_eq!(r.transition().activation, 0);
    }

    #[test]
    fn test_single_item_transition_stable() {
        let mut r = rotator(1);
        let initial = r.transition();

        r.next();
        assert_eq!(r.transition(), initial);
        r.previous();
        assert_eq!(r.transition(), initial);
        r.jump_to(0).unwrap();
        assert_eq!(r.transition(), initial);
        assert_eq!(r.transition().enter_offset(), 0.0);
    }

    #[test]
    fn test_jump_to_sets_index_and_direction() {
        let mut r = rotator(5);
        r.jump_to(3).unwrap();
        assert_eq!(r.active_index(), 3);
        assert_eq!(r.direction(), Some(Direction::Forward));

        r.jump_to(1).unwrap();
        assert_eq!(r.active_index(), 1);
        assert_eq!(r.direction(), Some(Direction::Backward));
    }

    #[test]
    fn test_jump_to_current_index_recomputes_direction() {
        let mut r = rotator(3);
        r.next();
        assert_eq!(r.direction(), Some(Direction::Forward));
        r.jump_to(1).unwrap();
        assert_eq!(r.active_index(), 1);
        assert_eq!(r.direction(), Some(Direction::Backward));
    }

    #[test]
    fn test_jump_to_current_index_keeps_transition() {
        let mut r = rotator(3);
        r.next();
        let before = r.transition();
        assert_eq!(before.enter_offset(), SLIDE_DISTANCE_PX);

        r.jump_to(1).unwrap();
        assert_eq!(r.direction(), Some(Direction::Backward));
        assert_eq!(r.transition(), before);
        assert_eq!(r.transition().enter_offset(), SLIDE_DISTANCE_PX);
        assert_eq!(r.transition().exit_offset(), -SLIDE_DISTANCE_PX);
    }

    #[test]
    fn test_activation_counts_index_changes() {
        let mut r = rotator(3);
        assert_eq!(r.transition().activation, 0);
        r.next();
        r.jump_to(1).unwrap();
        r.previous();
        assert_eq!(r.transition().activation, 2);
        assert_eq!(r.transition().direction, Some(Direction::Backward));
    }

    #[test]
    fn test_jump_out_of_range_leaves_state() {
        let mut r = rotator(3);
        r.next();
        let err = r.jump_to(3).unwrap_err();
        assert_eq!(err, RotatorError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(r.active_index(), 1);
        assert_eq!(r.direction(), Some(Direction::Forward));
        assert_eq!(err.to_string(), "Index 3 is out of range for 3 items");
    }

    #[test]
    fn test_transition_offsets_follow_direction() {
        let mut r = rotator(3);
        assert_eq!(r.transition().enter_offset(), 0.0);
        assert_eq!(r.transition().exit_offset(), 0.0);

        r.next();
        let t = r.transition();
        assert_eq!(t.incoming, 1);
        assert_eq!(t.outgoing, Some(0));
        assert_eq!(t.enter_offset(), SLIDE_DISTANCE_PX);
        assert_eq!(t.exit_offset(), -SLIDE_DISTANCE_PX);

        r.previous();
        let t = r.transition();
        assert_eq!(t.incoming, 0);
        assert_eq!(t.outgoing, Some(1));
        assert_eq!(t.enter_offset(), -SLIDE_DISTANCE_PX);
        assert_eq!(t.exit_offset(), SLIDE_DISTANCE_PX);
    }

    #[test]
    fn test_rapid_forward_never_reverses() {
        let mut r = rotator(3);
        for _ in 0..10 {
            r.next();
            assert!(r.transition().enter_offset() > 0.0);
            assert!(r.transition().exit_offset() < 0.0);
        }
    }

    #[test]
    fn test_indicators_reflect_active_index() {
        let mut r = rotator(4);
        r.jump_to(2).unwrap();
        let active: Vec<usize> = r
            .indicators()
            .filter(|(_, is_active)| *is_active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![2]);
        assert_eq!(r.indicators().count(), 4);
    }

    #[test]
    fn test_navigation_independent_of_visibility() {
        let mut r = rotator(3);
        assert!(!r.is_visible());
        r.jump_to(2).unwrap();
        assert_eq!(r.active_index(), 2);
        assert_eq!(r.on_visibility_change(true), Some(EntranceEvent::Start));
        assert!(r.is_visible());
    }

    #[test]
    fn test_active_returns_item() {
        let mut r = Rotator::new(vec!["a", "b"], EntrancePolicy::FireOnce).unwrap();
        assert_eq!(*r.active(), "a");
        r.next();
        assert_eq!(*r.active(), "b");
        assert_eq!(r.get(5), None);
        assert_eq!(r.items(), &["a", "b"]);
    }
}
