//! The interactive menu session.
//!
//! All user interaction runs through a [`Shell`]: a banner-and-menu loop on
//! the output stream, line-oriented reads on the input stream. Status lines
//! are written verbatim from the collection managers' results, so scripted
//! sessions can assert on whole transcripts.

use std::io::{BufRead, Write};

use qna::{AnswerId, AnswerManager, QuestionId, QuestionManager};
use tracing::instrument;

use super::terminal::Colorize;

/// How the shell treats numeric input that fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Report the problem and prompt again.
    #[default]
    Lenient,
    /// Abort the session with an error.
    Strict,
}

/// Runtime options for a [`Shell`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOptions {
    /// Numeric input handling.
    pub policy: InputPolicy,
    /// Whether status lines are colored.
    pub color: bool,
}

/// Menu entries, printed in order below the banner.
const MENU_ITEMS: [&str; 9] = [
    "1. Add a Question",
    "2. View All Questions",
    "3. Update a Question",
    "4. Delete a Question",
    "5. Add an Answer",
    "6. View Answers for a Question",
    "7. Update an Answer",
    "8. Delete an Answer",
    "9. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    AddQuestion,
    ViewQuestions,
    UpdateQuestion,
    DeleteQuestion,
    AddAnswer,
    ViewAnswers,
    UpdateAnswer,
    DeleteAnswer,
    Exit,
}

impl Choice {
    const fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::AddQuestion),
            2 => Some(Self::ViewQuestions),
            3 => Some(Self::UpdateQuestion),
            4 => Some(Self::DeleteQuestion),
            5 => Some(Self::AddAnswer),
            6 => Some(Self::ViewAnswers),
            7 => Some(Self::UpdateAnswer),
            8 => Some(Self::DeleteAnswer),
            9 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Tone of a status line, mapped to a [`Colorize`] style.
#[derive(Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Muted,
}

/// The interactive question-and-answer session.
///
/// Generic over its streams so that whole sessions can be scripted in tests.
/// The binary wires up locked stdin and stdout.
pub struct Shell<R, W> {
    input: R,
    out: W,
    questions: QuestionManager,
    answers: AnswerManager,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with empty collections.
    pub fn new(input: R, out: W, options: ShellOptions) -> Self {
        Self {
            input,
            out,
            questions: QuestionManager::new(),
            answers: AnswerManager::new(),
            options,
        }
    }

    /// Runs the menu loop until the user picks Exit.
    ///
    /// # Errors
    ///
    /// Returns an error when a stream fails, when input ends before the
    /// user exits, or, under [`InputPolicy::Strict`], when numeric input is
    /// malformed.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_choice()? else {
                self.report("Invalid choice. Try again.", Tone::Warning)?;
                continue;
            };
            tracing::debug!("Handling menu selection {choice:?}");
            match choice {
                Choice::AddQuestion => self.add_question()?,
                Choice::ViewQuestions => self.view_questions()?,
                Choice::UpdateQuestion => self.update_question()?,
                Choice::DeleteQuestion => self.delete_question()?,
                Choice::AddAnswer => self.add_answer()?,
                Choice::ViewAnswers => self.view_answers()?,
                Choice::UpdateAnswer => self.update_answer()?,
                Choice::DeleteAnswer => self.delete_answer()?,
                Choice::Exit => {
                    writeln!(self.out, "Exiting. Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    fn add_question(&mut self) -> anyhow::Result<()> {
        let title = self.prompt("Enter Title: ")?;
        let description = self.prompt("Enter Description: ")?;
        match self.questions.add(&title, &description) {
            Ok(id) => self.report(&format!("Question added! ID: {id}"), Tone::Success),
            Err(error) => self.report(&error.to_string(), Tone::Warning),
        }
    }

    fn view_questions(&mut self) -> anyhow::Result<()> {
        if self.questions.is_empty() {
            return self.report("No questions found.", Tone::Muted);
        }
        for question in &self.questions {
            writeln!(self.out, "{question}")?;
        }
        Ok(())
    }

    fn update_question(&mut self) -> anyhow::Result<()> {
        let id = QuestionId::new(self.prompt_id("Enter Question ID: ")?);
        let title = self.prompt("Enter New Title: ")?;
        let description = self.prompt("Enter New Description: ")?;
        if self.questions.update(id, &title, &description) {
            self.report("Question updated successfully.", Tone::Success)
        } else {
            self.report("No question found with that ID.", Tone::Warning)
        }
    }

    fn delete_question(&mut self) -> anyhow::Result<()> {
        let id = QuestionId::new(self.prompt_id("Enter Question ID to Delete: ")?);
        if self.questions.remove(id) {
            self.report("Question deleted.", Tone::Success)
        } else {
            self.report("Question not found.", Tone::Warning)
        }
    }

    fn add_answer(&mut self) -> anyhow::Result<()> {
        let question = QuestionId::new(self.prompt_id("Enter Question ID for the Answer: ")?);
        let text = self.prompt("Enter Answer: ")?;
        match self.answers.add(question, &text) {
            Ok(_) => self.report("Answer added!", Tone::Success),
            Err(error) => self.report(&error.to_string(), Tone::Warning),
        }
    }

    fn view_answers(&mut self) -> anyhow::Result<()> {
        let question = QuestionId::new(self.prompt_id("Enter Question ID to View Answers: ")?);
        let lines: Vec<String> = self
            .answers
            .for_question(question)
            .map(ToString::to_string)
            .collect();
        if lines.is_empty() {
            return self.report("No answers available.", Tone::Muted);
        }
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn update_answer(&mut self) -> anyhow::Result<()> {
        let id = AnswerId::new(self.prompt_id("Enter Answer ID to Update: ")?);
        let text = self.prompt("Enter New Answer: ")?;
        if self.answers.update(id, &text) {
            self.report("Answer updated.", Tone::Success)
        } else {
            self.report("Answer not found.", Tone::Warning)
        }
    }

    fn delete_answer(&mut self) -> anyhow::Result<()> {
        let id = AnswerId::new(self.prompt_id("Enter Answer ID to Delete: ")?);
        if self.answers.remove(id) {
            self.report("Answer deleted.", Tone::Success)
        } else {
            self.report("Answer not found.", Tone::Warning)
        }
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Student Q&A System")?;
        for item in MENU_ITEMS {
            writeln!(self.out, "{item}")?;
        }
        write!(self.out, "Choose an option: ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Reads a menu selection, or `None` when it should be retried.
    ///
    /// An out-of-range number is always a retry. A line that is not a number
    /// at all is a retry under the lenient policy and fatal under the strict
    /// one.
    fn read_choice(&mut self) -> anyhow::Result<Option<Choice>> {
        let line = self.read_line()?;
        let Ok(number) = line.parse::<i64>() else {
            if self.options.policy == InputPolicy::Strict {
                anyhow::bail!("menu selection {line:?} is not a number");
            }
            return Ok(None);
        };
        Ok(Choice::from_number(number))
    }

    /// Prompts for a numeric identifier until one parses.
    ///
    /// Under the strict policy a malformed line aborts instead of looping.
    /// The line is parsed as-is: surrounding whitespace is not accepted, but
    /// signs are, so negative identifiers pass through and simply miss.
    fn prompt_id(&mut self, label: &str) -> anyhow::Result<i64> {
        loop {
            let line = self.prompt(label)?;
            let Ok(number) = line.parse::<i64>() else {
                if self.options.policy == InputPolicy::Strict {
                    anyhow::bail!("expected a numeric ID, got {line:?}");
                }
                self.report("Please enter a valid number.", Tone::Warning)?;
                continue;
            };
            return Ok(number);
        }
    }

    fn prompt(&mut self, label: &str) -> anyhow::Result<String> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Reads one line, without its trailing newline.
    ///
    /// End of input is an error: the session has no way to recover once the
    /// stream is exhausted.
    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("input ended before the session was exited");
        }
        let length = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(length);
        Ok(line)
    }

    fn report(&mut self, line: &str, tone: Tone) -> anyhow::Result<()> {
        let styled = if self.options.color {
            match tone {
                Tone::Success => line.success(),
                Tone::Warning => line.warning(),
                Tone::Muted => line.dim(),
            }
        } else {
            line.to_string()
        };
        writeln!(self.out, "{styled}")?;
        Ok(())
    }
}
