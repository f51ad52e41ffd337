//! Quiz & activities: static question table, per-session score, angle hunt,
//! property match.
//!
//! Session state lives in a plain `QuizSession` owned by the caller; there is
//! no process-wide state. `reset` starts over.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use regpoly::{compute_properties, InvalidPolygonError, PolygonProperties};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
}

pub const QUESTIONS: [Question; 3] = [
    Question {
        prompt: "What is the sum of interior angles in a pentagon?",
        options: &["360°", "540°", "720°", "900°"],
        correct: 1,
        explanation: "Formula: (n-2) × 180° = (5-2) × 180° = 540°",
    },
    Question {
        prompt: "How many sides does a decagon have?",
        options: &["8", "9", "10", "12"],
        correct: 2,
        explanation: "Decagon means 10 sides (deca = ten)",
    },
    Question {
        prompt: "What is each exterior angle of a regular hexagon?",
        options: &["45°", "60°", "90°", "120°"],
        correct: 1,
        explanation: "Each exterior angle = 360° ÷ 6 = 60°",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Every question has been answered; call `reset` to play again.
    Finished,
    /// Answer index outside the option list (0-based).
    ChoiceOutOfRange { choice: usize, options: usize },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Finished => write!(f, "quiz already complete"),
            QuizError::ChoiceOutOfRange { choice, options } => write!(
                f,
                "answer {} is not one of the {options} options",
                choice + 1
            ),
        }
    }
}

impl std::error::Error for QuizError {}

/// Outcome of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub correct_option: &'static str,
    pub explanation: &'static str,
    /// True when this answer was the last question.
    pub finished: bool,
}

/// Score and position of one quiz run.
#[derive(Debug, Clone)]
pub struct QuizSession<'q> {
    questions: &'q [Question],
    score: usize,
    index: usize,
}

impl Default for QuizSession<'static> {
    fn default() -> Self {
        Self::new(&QUESTIONS)
    }
}

impl<'q> QuizSession<'q> {
    pub fn new(questions: &'q [Question]) -> Self {
        Self {
            questions,
            score: 0,
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&'q Question> {
        self.questions.get(self.index)
    }

    /// 1-based number of the current question.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// Answer the current question with a 0-based option index and advance.
    pub fn submit(&mut self, choice: usize) -> Result<Feedback, QuizError> {
        let q = self.current().ok_or(QuizError::Finished)?;
        if choice >= q.options.len() {
            return Err(QuizError::ChoiceOutOfRange {
                choice,
                options: q.options.len(),
            });
        }
        let correct = choice == q.correct;
        if correct {
            self.score += 1;
        }
        self.index += 1;
        Ok(Feedback {
            correct,
            correct_option: q.options[q.correct],
            explanation: q.explanation,
            finished: self.is_complete(),
        })
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.index = 0;
    }
}

/// Play a session over line-oriented I/O. Answers are 1-based option numbers;
/// unreadable lines re-prompt. Stops early at end of input.
pub fn run_quiz<R: BufRead, W: Write>(
    session: &mut QuizSession<'_>,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let mut line = String::new();
    while let Some(q) = session.current() {
        writeln!(out, "Question {}: {}", session.number(), q.prompt)?;
        for (i, opt) in q.options.iter().enumerate() {
            writeln!(out, "  {}) {opt}", i + 1)?;
        }
        write!(out, "Choose your answer: ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line).context("reading answer")? == 0 {
            writeln!(out)?;
            tracing::warn!(answered = session.number() - 1, "quiz input ended early");
            break;
        }
        let choice = match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                writeln!(out, "Please enter a number between 1 and {}.", q.options.len())?;
                continue;
            }
        };
        match session.submit(choice) {
            Ok(fb) => {
                if fb.correct {
                    writeln!(out, "Correct!")?;
                } else {
                    writeln!(out, "Incorrect. The correct answer is: {}", fb.correct_option)?;
                }
                writeln!(out, "Explanation: {}", fb.explanation)?;
            }
            Err(err @ QuizError::ChoiceOutOfRange { .. }) => writeln!(out, "{err}")?,
            Err(err) => return Err(err.into()),
        }
    }
    if session.is_complete() {
        writeln!(
            out,
            "Quiz Complete! Your score: {}/{}",
            session.score(),
            session.total()
        )?;
    }
    Ok(())
}

/// Side counts offered by the angle hunt.
pub const HUNT_SIDES: [u32; 5] = [3, 4, 5, 6, 8];
/// Accepted deviation for angle guesses, in degrees.
pub const ANGLE_TOLERANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HuntOutcome {
    Both,
    InteriorOnly,
    ExteriorOnly,
    Neither,
}

impl HuntOutcome {
    pub fn message(self) -> &'static str {
        match self {
            HuntOutcome::Both => "Perfect! Both angles are correct!",
            HuntOutcome::InteriorOnly => {
                "Interior angle is correct, but check the exterior angle."
            }
            HuntOutcome::ExteriorOnly => {
                "Exterior angle is correct, but check the interior angle."
            }
            HuntOutcome::Neither => "Both angles need adjustment. Try again!",
        }
    }
}

/// Grade interior/exterior guesses for a regular polygon.
pub fn check_angles(
    sides: u32,
    interior_guess: f64,
    exterior_guess: f64,
) -> Result<(HuntOutcome, PolygonProperties), InvalidPolygonError> {
    let props = compute_properties(sides, 1.0)?;
    let interior_ok = (interior_guess - props.interior_angle_degrees).abs() < ANGLE_TOLERANCE;
    let exterior_ok = (exterior_guess - props.exterior_angle_degrees).abs() < ANGLE_TOLERANCE;
    let outcome = match (interior_ok, exterior_ok) {
        (true, true) => HuntOutcome::Both,
        (true, false) => HuntOutcome::InteriorOnly,
        (false, true) => HuntOutcome::ExteriorOnly,
        (false, false) => HuntOutcome::Neither,
    };
    Ok((outcome, props))
}

/// One card of the property-match activity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MatchCard {
    pub name: &'static str,
    pub sides: u32,
    pub interior: f64,
    pub sum_interior: f64,
}

impl MatchCard {
    pub fn exterior(&self) -> f64 {
        360.0 / f64::from(self.sides)
    }
}

pub const MATCH_CARDS: [MatchCard; 5] = [
    MatchCard {
        name: "Triangle",
        sides: 3,
        interior: 60.0,
        sum_interior: 180.0,
    },
    MatchCard {
        name: "Square",
        sides: 4,
        interior: 90.0,
        sum_interior: 360.0,
    },
    MatchCard {
        name: "Pentagon",
        sides: 5,
        interior: 108.0,
        sum_interior: 540.0,
    },
    MatchCard {
        name: "Hexagon",
        sides: 6,
        interior: 120.0,
        sum_interior: 720.0,
    },
    MatchCard {
        name: "Octagon",
        sides: 8,
        interior: 135.0,
        sum_interior: 1080.0,
    },
];

pub fn card_named(name: &str) -> Option<&'static MatchCard> {
    MATCH_CARDS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}
