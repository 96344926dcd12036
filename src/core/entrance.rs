//! Viewport-driven entrance animation trigger
//!
//! The trigger never observes the viewport itself. A boundary collaborator
//! (an IntersectionObserver in the browser) reports visibility changes and the
//! trigger decides whether the entrance animation should start or be re-armed.

/// How a trigger reacts to repeated visibility reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntrancePolicy {
    /// Animate the first time the element becomes visible, then stay visible
    #[default]
    FireOnce,
    /// Animate on every entry and reset on every exit
    Repeat,
}

/// What the view should do after a visibility report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceEvent {
    /// Play the entrance animation
    Start,
    /// Return to the hidden pose so the next entry animates again
    Reset,
}

/// Visibility gate for an entrance animation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntranceTrigger {
    policy: EntrancePolicy,
    visible: bool,
    fired: bool,
}

impl EntranceTrigger {
    pub fn new(policy: EntrancePolicy) -> Self {
        Self {
            policy,
            visible: false,
            fired: false,
        }
    }

    pub fn fire_once() -> Self {
        Self::new(EntrancePolicy::FireOnce)
    }

    pub fn repeat() -> Self {
        Self::new(EntrancePolicy::Repeat)
    }

    pub fn policy(&self) -> EntrancePolicy {
        self.policy
    }

    /// Whether the element is in its visible pose
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the entrance animation has played at least once
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Apply a visibility report from the observer.
    ///
    /// Returns the event the view should react to, or `None` when the report
    /// does not change anything (duplicate report, or any report after a
    /// fire-once trigger has fired).
    pub fn on_visibility_change(&mut self, is_visible: bool) -> Option<EntranceEvent> {
        match self.policy {
            EntrancePolicy::FireOnce => {
                if self.fired || !is_visible {
                    return None;
                }
                self.visible = true;
                self.fired = true;
                Some(EntranceEvent::Start)
            }
            EntrancePolicy::Repeat => {
                if self.visible == is_visible {
                    return None;
                }
                self.visible = is_visible;
                if is_visible {
                    self.fired = true;
                    Some(EntranceEvent::Start)
                } else {
                    Some(EntranceEvent::Reset)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let trigger = EntranceTrigger::fire_once();
        assert!(!trigger.is_visible());
        assert!(!trigger.has_fired());
        assert_eq!(EntranceTrigger::default().policy(), EntrancePolicy::FireOnce);
    }

    #[test]
    fn test_fire_once_fires_exactly_once() {
        let mut trigger = EntranceTrigger::fire_once();

        assert_eq!(trigger.on_visibility_change(false), None);
        assert_eq!(
            trigger.on_visibility_change(true),
            Some(EntranceEvent::Start)
        );
        assert_eq!(trigger.on_visibility_change(false), None);
        assert_eq!(trigger.on_visibility_change(true), None);

        // Leaving the viewport never hides a fire-once element again
        assert!(trigger.is_visible());
        assert!(trigger.has_fired());
    }

    #[test]
    fn test_repeat_rearms_on_every_exit() {
        let mut trigger = EntranceTrigger::repeat();

        assert_eq!(
            trigger.on_visibility_change(true),
            Some(EntranceEvent::Start)
        );
        assert_eq!(
            trigger.on_visibility_change(false),
            Some(EntranceEvent::Reset)
        );
        assert!(!trigger.is_visible());
        assert_eq!(
            trigger.on_visibility_change(true),
            Some(EntranceEvent::Start)
        );
        assert!(trigger.is_visible());
    }

    #[test]
    fn test_repeat_ignores_duplicate_reports() {
        let mut trigger = EntranceTrigger::repeat();

        assert_eq!(trigger.on_visibility_change(false), None);
        assert!(trigger.on_visibility_change(true).is_some());
        assert_eq!(trigger.on_visibility_change(true), None);
    }
}
