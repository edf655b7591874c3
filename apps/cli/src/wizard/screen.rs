//! The four wizard screens and the navigation edges between them.

/// One screen of the linear wizard. Declaration order is wizard order;
/// [`Screen::back`] walks it in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    QuestionIntake,
    AnswerCollection,
    ResumeGeneration,
}

impl Screen {
    /// Route identifier, preserved from the original client-side router so
    /// deep entry points stay addressable.
    pub fn route(self) -> &'static str {
        match self {
            Screen::Landing => "/",
            Screen::QuestionIntake => "/perguntas",
            Screen::AnswerCollection => "/respostas",
            Screen::ResumeGeneration => "/gerar",
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        match route {
            "/" => Some(Screen::Landing),
            "/perguntas" => Some(Screen::QuestionIntake),
            "/respostas" => Some(Screen::AnswerCollection),
            "/gerar" => Some(Screen::ResumeGeneration),
            _ => None,
        }
    }

    /// The predecessor screen. Landing is its own predecessor.
    pub fn back(self) -> Self {
        match self {
            Screen::Landing | Screen::QuestionIntake => Screen::Landing,
            Screen::AnswerCollection => Screen::QuestionIntake,
            Screen::ResumeGeneration => Screen::AnswerCollection,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Landing => "Welcome",
            Screen::QuestionIntake => "Area of interest",
            Screen::AnswerCollection => "Your answers",
            Screen::ResumeGeneration => "Résumé",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Screen; 4] = [
        Screen::Landing,
        Screen::QuestionIntake,
        Screen::AnswerCollection,
        Screen::ResumeGeneration,
    ];

    #[test]
    fn test_routes_round_trip() {
        for screen in ALL {
            assert_eq!(Screen::from_route(screen.route()), Some(screen));
        }
    }

    #[test]
    fn test_unknown_route_is_rejected() {
        assert_eq!(Screen::from_route("/unknown"), None);
        assert_eq!(Screen::from_route("perguntas"), None);
        assert_eq!(Screen::from_route(""), None);
    }

    #[test]
    fn test_back_edges_follow_wizard_order() {
        assert_eq!(Screen::ResumeGeneration.back(), Screen::AnswerCollection);
        assert_eq!(Screen::AnswerCollection.back(), Screen::QuestionIntake);
        assert_eq!(Screen::QuestionIntake.back(), Screen::Landing);
    }

    #[test]
    fn test_landing_backs_onto_itself() {
        assert_eq!(Screen::Landing.back(), Screen::Landing);
    }
}
