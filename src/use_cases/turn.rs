use super::types::{CommandOutcome, CommandReport, WormCommand};
use crate::domain::{JumpOutcome, Worm, WormError, WormSnapshot};
use tracing::{info, warn};

// Applies commands to a single worm in order, the way a game loop would on the worm's turn.
pub struct TurnRunner {
    worm: Worm,
    next_index: usize,
}

impl TurnRunner {
    pub fn new(worm: Worm) -> Self {
        Self {
            worm,
            next_index: 0,
        }
    }

    pub fn worm(&self) -> &Worm {
        &self.worm
    }

    pub fn into_worm(self) -> Worm {
        self.worm
    }

    /// Applies one command. A rejected command leaves the worm unchanged and is reported, not raised.
    pub fn execute(&mut self, command: WormCommand) -> CommandReport {
        let index = self.next_index;
        self.next_index += 1;

        let outcome = match apply(&mut self.worm, &command) {
            Ok(outcome) => {
                info!(
                    index,
                    worm = self.worm.name(),
                    ?command,
                    action_points = self.worm.action_points(),
                    "command applied"
                );
                outcome
            }
            Err(err) => {
                warn!(
                    index,
                    worm = self.worm.name(),
                    ?command,
                    error = %err,
                    "command rejected"
                );
                CommandOutcome::Rejected {
                    reason: err.to_string(),
                }
            }
        };

        CommandReport {
            index,
            command,
            outcome,
            worm: WormSnapshot::from(&self.worm),
        }
    }

    /// Applies every command in order, continuing past rejections.
    pub fn run<I>(&mut self, commands: I) -> Vec<CommandReport>
    where
        I: IntoIterator<Item = WormCommand>,
    {
        commands
            .into_iter()
            .map(|command| self.execute(command))
            .collect()
    }
}

fn apply(worm: &mut Worm, command: &WormCommand) -> Result<CommandOutcome, WormError> {
    match command {
        WormCommand::Move { steps } => worm.move_steps(*steps).map(|_| CommandOutcome::Applied),
        WormCommand::Turn { angle } => worm.turn(*angle).map(|_| CommandOutcome::Applied),
        WormCommand::Jump => worm.jump().map(|outcome| match outcome {
            JumpOutcome::Jumped { distance } => CommandOutcome::Jumped { distance },
            JumpOutcome::FacingDown => CommandOutcome::StayedPut,
        }),
        WormCommand::Rename { name } => worm.set_name(name).map(|_| CommandOutcome::Applied),
        WormCommand::Resize { radius } => worm.set_radius(*radius).map(|_| CommandOutcome::Applied),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn runner() -> TurnRunner {
        TurnRunner::new(Worm::new(0.0, 0.0, 0.25, 0.0, "Tiny").expect("valid worm"))
    }

    #[test]
    fn when_command_is_legal_then_report_reflects_new_state() {
        let mut runner = runner();

        let report = runner.execute(WormCommand::Move { steps: 4 });

        assert_eq!(report.index, 0);
        assert_eq!(report.outcome, CommandOutcome::Applied);
        assert_eq!(report.worm.x, 1.0);
        assert_eq!(report.worm.action_points, 66);
    }

    #[test]
    fn when_command_is_rejected_then_state_is_unchanged_and_run_continues() {
        let mut runner = runner();

        let reports = runner.run([
            WormCommand::Move { steps: -2 },
            WormCommand::Rename {
                name: "bad".to_string(),
            },
            WormCommand::Turn { angle: PI },
        ]);

        assert_eq!(reports.len(), 3);
        assert!(matches!(
            reports[0].outcome,
            CommandOutcome::Rejected { .. }
        ));
        assert_eq!(reports[0].worm.action_points, 70);
        assert!(matches!(
            reports[1].outcome,
            CommandOutcome::Rejected { .. }
        ));
        assert_eq!(reports[1].worm.name, "Tiny");
        assert_eq!(reports[2].outcome, CommandOutcome::Applied);
        assert_eq!(reports[2].index, 2);
        assert_eq!(runner.worm().action_points(), 40);
    }

    #[test]
    fn when_jumping_facing_down_then_worm_stays_put() {
        let mut runner = runner();
        runner.execute(WormCommand::Turn { angle: -FRAC_PI_2 });

        let report = runner.execute(WormCommand::Jump);

        assert_eq!(report.outcome, CommandOutcome::StayedPut);
        assert_eq!(report.worm.action_points, 55);
    }

    #[test]
    fn when_jumping_without_ap_then_reason_is_reported() {
        let mut runner = runner();
        runner.execute(WormCommand::Turn { angle: 0.5 });
        runner.execute(WormCommand::Jump);

        let report = runner.execute(WormCommand::Jump);

        assert_eq!(
            report.outcome,
            CommandOutcome::Rejected {
                reason: WormError::NoActionPoints.to_string()
            }
        );
    }

    #[test]
    fn when_resized_then_snapshot_carries_new_mass() {
        let mut runner = runner();

        let report = runner.execute(WormCommand::Resize { radius: 1.0 });

        assert_eq!(report.outcome, CommandOutcome::Applied);
        assert_eq!(report.worm.max_action_points, 4448);
        assert_eq!(report.worm.action_points, 70);
        assert_eq!(runner.into_worm().radius(), 1.0);
    }
}
