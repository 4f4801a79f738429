//! Screen state machine: which view is shown and what entering it implies.

use crate::error::GameError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Menu,
    Lobby,
    Game,
    Feedback,
    Leaderboard,
}

/// User or game driven requests to move between screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ChooseCategory,
    StartGame,
    ExitGame,
    GameOver,
    TimeUp,
    ReturnToMenu,
    SubmitFeedback,
    OpenLeaderboard,
}

/// Side effects the shell applies when a screen becomes active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntryEffects {
    pub stop_timer: bool,
    pub reset_score: bool,
    pub show_final_score: bool,
    pub animate_backdrop: bool,
    pub refresh_leaderboard: bool,
}

impl Action {
    /// Whether ending the game this way records the score on the leaderboard.
    /// Only losing on wrong guesses does; quitting or running out of time does not.
    pub fn records_score(self) -> bool {
        matches!(self, Action::GameOver)
    }
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Menu,
        Screen::Lobby,
        Screen::Game,
        Screen::Feedback,
        Screen::Leaderboard,
    ];

    /// DOM id of the container holding this screen.
    pub fn element_id(self) -> &'static str {
        match self {
            Screen::Menu => "menu-screen",
            Screen::Lobby => "lobby-screen",
            Screen::Game => "game-screen",
            Screen::Feedback => "feedback-screen",
            Screen::Leaderboard => "leaderboard-screen",
        }
    }

    pub fn transition(self, action: Action) -> Result<Screen, GameError> {
        use Action::*;
        use Screen::*;
        match (self, action) {
            (Menu, ChooseCategory) => Ok(Lobby),
            (Menu, OpenLeaderboard) => Ok(Leaderboard),
            (_, OpenLeaderboard) => Err(GameError::LeaderboardOnlyFromMenu),
            (Lobby, StartGame) => Ok(Game),
            (Lobby | Feedback | Leaderboard, ReturnToMenu) => Ok(Menu),
            (Game, ExitGame | GameOver | TimeUp) => Ok(Feedback),
            (Feedback, SubmitFeedback) => Ok(Menu),
            (from, action) => Err(GameError::InvalidTransition { from, action }),
        }
    }

    pub fn entry_effects(self) -> EntryEffects {
        match self {
            Screen::Menu | Screen::Lobby => EntryEffects {
                stop_timer: true,
                animate_backdrop: true,
                ..EntryEffects::default()
            },
            Screen::Game => EntryEffects {
                reset_score: true,
                ..EntryEffects::default()
            },
            Screen::Feedback => EntryEffects {
                stop_timer: true,
                show_final_score: true,
                animate_backdrop: true,
                ..EntryEffects::default()
            },
            Screen::Leaderboard => EntryEffects {
                stop_timer: true,
                animate_backdrop: true,
                refresh_leaderboard: true,
                ..EntryEffects::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_round_trip() {
        let s = Screen::Menu;
        let s = s.transition(Action::ChooseCategory).unwrap();
        assert_eq!(s, Screen::Lobby);
        let s = s.transition(Action::StartGame).unwrap();
        assert_eq!(s, Screen::Game);
        let s = s.transition(Action::GameOver).unwrap();
        assert_eq!(s, Screen::Feedback);
        let s = s.transition(Action::SubmitFeedback).unwrap();
        assert_eq!(s, Screen::Menu);
    }

    #[test]
    fn every_game_ending_leads_to_feedback() {
        for a in [Action::ExitGame, Action::GameOver, Action::TimeUp] {
            assert_eq!(Screen::Game.transition(a).unwrap(), Screen::Feedback);
        }
    }

    #[test]
    fn only_game_over_records_score() {
        assert!(Action::GameOver.records_score());
        for a in [Action::ExitGame, Action::TimeUp, Action::StartGame, Action::SubmitFeedback] {
            assert!(!a.records_score(), "{a:?} should not record a score");
        }
    }

    #[test]
    fn leaderboard_only_from_menu() {
        assert_eq!(
            Screen::Menu.transition(Action::OpenLeaderboard).unwrap(),
            Screen::Leaderboard
        );
        for s in [Screen::Lobby, Screen::Game, Screen::Feedback, Screen::Leaderboard] {
            assert!(matches!(
                s.transition(Action::OpenLeaderboard),
                Err(GameError::LeaderboardOnlyFromMenu)
            ));
        }
    }

    #[test]
    fn game_cannot_jump_back_to_menu() {
        let err = Screen::Game.transition(Action::ReturnToMenu).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidTransition { from: Screen::Game, action: Action::ReturnToMenu }
        ));
    }

    #[test]
    fn entering_game_resets_score_and_pauses_backdrop() {
        let fx = Screen::Game.entry_effects();
        assert!(fx.reset_score && !fx.stop_timer);
        assert!(!fx.animate_backdrop);
        assert!(Screen::Feedback.entry_effects().show_final_score);
        assert!(Screen::Leaderboard.entry_effects().refresh_leaderboard);
    }

    #[test]
    fn element_ids_are_distinct() {
        let ids: std::collections::HashSet<_> = Screen::ALL.iter().map(|s| s.element_id()).collect();
        assert_eq!(ids.len(), Screen::ALL.len());
    }
}
