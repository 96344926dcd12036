#[cfg(test)]
mod tests {
    use crate::core::{
        Direction, EntrancePolicy, Rotator, SubmissionError, SubmissionFlow, SubmissionStatus,
        WaitlistAction, resolve_with_timeout,
    };
    use futures::executor::block_on;
    use futures::future::{LocalBoxFuture, pending};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every email it receives and answers with a fixed outcome
    struct RecordingAction {
        calls: Rc<RefCell<Vec<String>>>,
        outcome: Result<(), SubmissionError>,
    }

    impl RecordingAction {
        fn new(outcome: Result<(), SubmissionError>) -> Self {
            Self {
                calls: Rc::new(RefCell::new(Vec::new())),
                outcome,
            }
        }
    }

    impl WaitlistAction for RecordingAction {
        fn submit(&self, email: String) -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
            self.calls.borrow_mut().push(email);
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }
    }

    /// Submit through the action the same way the waitlist form does
    fn submit(flow: &mut SubmissionFlow, action: &dyn WaitlistAction) -> bool {
        let Ok(accepted) = flow.begin_submit() else {
            return false;
        };
        assert_eq!(flow.status(), SubmissionStatus::Submitting);
        let attempt = accepted.attempt();
        let outcome = block_on(resolve_with_timeout(
            action.submit(accepted.into_email()),
            Some(pending::<()>()),
            10_000,
        ));
        flow.complete(attempt, outcome)
    }

    #[test]
    fn test_three_nexts_cycle_back() {
        let mut rotator = Rotator::new(vec!['A', 'B', 'C'], EntrancePolicy::Repeat).unwrap();
        let mut seen = Vec::new();

        for _ in 0..3 {
            rotator.next();
            seen.push(rotator.active_index());
            assert_eq!(rotator.direction(), Some(Direction::Forward));
        }

        assert_eq!(seen, vec![1, 2, 0]);
        assert_eq!(*rotator.active(), 'A');
    }

    #[test]
    fn test_jump_back_to_start_is_backward() {
        let mut rotator = Rotator::new(vec!['A', 'B', 'C'], EntrancePolicy::Repeat).unwrap();
        rotator.jump_to(2).unwrap();
        rotator.jump_to(0).unwrap();
        assert_eq!(rotator.active_index(), 0);
        assert_eq!(rotator.direction(), Some(Direction::Backward));
    }

    #[test]
    fn test_jump_direction_matches_sign() {
        for len in 1..=5 {
            for before in 0..len {
                for target in 0..len {
                    let mut rotator =
                        Rotator::new((0..len).collect::<Vec<_>>(), EntrancePolicy::FireOnce)
                            .unwrap();
                    rotator.jump_to(before).unwrap();
                    rotator.jump_to(target).unwrap();

                    let expected = if target > before {
                        Direction::Forward
                    } else {
                        Direction::Backward
                    };
                    assert_eq!(rotator.active_index(), target);
                    assert_eq!(rotator.direction(), Some(expected));
                }
            }
        }
    }

    #[test]
    fn test_invalid_email_never_reaches_action() {
        let action = RecordingAction::new(Ok(()));
        let mut flow = SubmissionFlow::new();
        flow.set_field_value("not-an-email");

        assert!(!submit(&mut flow, &action));
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert!(flow.validation_error().is_some());
        assert!(action.calls.borrow().is_empty());
    }

    #[test]
    fn test_successful_signup() {
        let action = RecordingAction::new(Ok(()));
        let mut flow = SubmissionFlow::new();
        flow.set_field_value("user@example.com");

        assert!(submit(&mut flow, &action));
        assert_eq!(flow.status(), SubmissionStatus::Success);
        assert_eq!(flow.field_value(), "");
        assert_eq!(*action.calls.borrow(), vec!["user@example.com".to_string()]);
    }

    #[test]
    fn test_failed_signup_then_retry() {
        let failing = RecordingAction::new(Err(SubmissionError::Network("offline".into())));
        let mut flow = SubmissionFlow::new();
        flow.set_field_value("user@example.com");

        assert!(submit(&mut flow, &failing));
        assert_eq!(flow.status(), SubmissionStatus::Error);
        // No automatic retry
        assert_eq!(failing.calls.borrow().len(), 1);

        assert!(flow.reset());
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert!(flow.failure().is_none());
        assert!(flow.validation_error().is_none());

        let working = RecordingAction::new(Ok(()));
        assert!(submit(&mut flow, &working));
        assert_eq!(flow.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_timeout_maps_to_error() {
        let mut flow = SubmissionFlow::new();
        flow.set_field_value("user@example.com");
        let pending_submission = flow.begin_submit().unwrap();

        let outcome = block_on(resolve_with_timeout(
            pending::<Result<(), SubmissionError>>(),
            Some(futures::future::ready(())),
            1000,
        ));
        assert!(flow.complete(pending_submission.attempt(), outcome));
        assert_eq!(flow.status(), SubmissionStatus::Error);
        assert_eq!(
            flow.failure(),
            Some(&SubmissionError::TimedOut { after_ms: 1000 })
        );
    }
}
