//! Interactive data entry.

use std::{
    fmt,
    io::{self, Write as _},
    str::FromStr,
};

use common::Money;
use derive_more::{Display, Error as StdError, From};
use inquire::{
    validator::Validation, Confirm, CustomUserError, InquireError, Text,
};
use rust_decimal::Decimal;
use service::domain::property::{apartment::Floor, house::Count};
use tracing as log;

/// Largest amount of money accepted at data entry.
pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000_000);

/// Parser of a trimmed answer, rejecting it with a hint to the user.
pub type Parse<T> = fn(&str) -> Result<T, &'static str>;

/// Console the questions are asked on.
pub trait Console {
    /// Prints the provided `text` as a separate line.
    ///
    /// # Errors
    ///
    /// If the output cannot be written.
    fn say(&mut self, text: &str) -> Result<(), Error>;

    /// Asks the question labeled with `label` until its answer is accepted by
    /// `parse`.
    ///
    /// # Errors
    ///
    /// If the question is interrupted or any I/O fails.
    fn ask<T: 'static>(
        &mut self,
        label: &str,
        parse: Parse<T>,
    ) -> Result<T, Error>;

    /// Asks a yes/no question, deciding on the answer with `is_yes`.
    ///
    /// # Errors
    ///
    /// If the question is interrupted or any I/O fails.
    fn confirm(
        &mut self,
        label: &str,
        is_yes: &dyn Fn(&str) -> bool,
    ) -> Result<bool, Error>;
}

/// [`Console`] of the interactive terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Terminal;

impl Console for Terminal {
    fn say(&mut self, text: &str) -> Result<(), Error> {
        writeln!(io::stdout(), "{text}")?;
        Ok(())
    }

    fn ask<T: 'static>(
        &mut self,
        label: &str,
        parse: Parse<T>,
    ) -> Result<T, Error> {
        loop {
            let answer = Text::new(label)
                .with_validator(move |s: &str| {
                    Ok::<_, CustomUserError>(match parse(s.trim()) {
                        Ok(_) => Validation::Valid,
                        Err(hint) => Validation::Invalid(hint.into()),
                    })
                })
                .prompt()?;
            match parse(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(hint) => self.say(hint)?,
            }
        }
    }

    fn confirm(
        &mut self,
        label: &str,
        is_yes: &dyn Fn(&str) -> bool,
    ) -> Result<bool, Error> {
        let parser = |s: &str| Ok::<_, ()>(is_yes(s.trim()));
        Ok(Confirm::new(label).with_parser(&parser).prompt()?)
    }
}

/// Prompter asking typed questions on a [`Console`].
#[derive(Debug)]
pub struct Prompter<C> {
    /// [`Console`] the questions are asked on.
    console: C,

    /// Lowercase answer prefixes meaning "yes".
    affirmative: Vec<String>,
}

impl<C: Console> Prompter<C> {
    /// Creates a new [`Prompter`] treating answers starting with any of the
    /// `affirmative` prefixes as "yes".
    #[must_use]
    pub fn new(console: C, affirmative: Vec<String>) -> Self {
        let affirmative = affirmative
            .into_iter()
            .map(|m| m.trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        Self {
            console,
            affirmative,
        }
    }

    /// Prints the provided `text` as a separate line.
    ///
    /// # Errors
    ///
    /// If the output cannot be written.
    pub fn say(&mut self, text: impl fmt::Display) -> Result<(), Error> {
        self.console.say(&text.to_string())
    }

    /// Asks for a single answer, returning it trimmed and unvalidated.
    ///
    /// # Errors
    ///
    /// If the question is interrupted or any I/O fails.
    pub fn line(&mut self, label: &str) -> Result<String, Error> {
        self.console.ask(label, |s| Ok(s.to_owned()))
    }

    /// Asks for a non-empty value, until it parses into a `T`.
    ///
    /// # Errors
    ///
    /// If the question is interrupted or any I/O fails.
    pub fn text<T: FromStr + 'static>(
        &mut self,
        label: &str,
    ) -> Result<T, Error> {
        self.console.ask(label, parse_text::<T>)
    }

    /// Asks for a non-negative amount of money, until a valid one is entered.
    ///
    /// # Errors
    ///
    /// If the question is interrupted or any I/O fails.
    pub fn amount(&mut self, label: &str) -> Result<Money, Error> {
        self.console.ask(label, parse_amount)
    }

    /// Asks once for a signed amount of money.
    ///
    /// Anything unparsable or beyond [`MAX_AMOUNT`] is taken as zero, with a
    /// notice.
    ///
    /// # Errors
    ///
    /// If the question is interrupted or any I/O fails.
    pub fn adjustment(&mut self, label: &str) -> Result<Money, Error> {
        let answer = self.line(label)?;
        if let Some(amount) = parse_adjustment(&answer) {
            return Ok(amount);
        }

        log::warn!("invalid adjustment `{answer}` replaced with 0");
        self.say("Invalid value. Adjustment set to 0.")?;
        Ok(Money::ZERO)
    }

    /// Asks for a non-negative whole number, until a valid one is entered.
    ///
    /// # Errors
    ///
    /// If the question is interrupted or any I/O fails.
    pub fn count(&mut self, label: &str) -> Result<Count, Error> {
        self.console.ask(label, parse_count)
    }

    /// Asks for a whole [`Floor`] number, until a valid one is entered.
    ///
    /// # Errors
    ///
    /// If the question is interrupted or any I/O fails.
    pub fn floor(&mut self, label: &str) -> Result<Floor, Error> {
        self.console.ask(label, parse_floor)
    }

    /// Asks for a number greater than zero, until a valid one is entered.
    ///
    /// # Errors
    ///
    /// If the question is interrupted or any I/O fails.
    pub fn positive(&mut self, label: &str) -> Result<Decimal, Error> {
        self.console.ask(label, parse_positive)
    }

    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// If the question is interrupted or any I/O fails.
    pub fn confirm(&mut self, label: &str) -> Result<bool, Error> {
        let affirmative = &self.affirmative;
        self.console.confirm(label, &|answer: &str| {
            is_affirmative(affirmative, answer)
        })
    }
}

fn parse_text<T: FromStr>(s: &str) -> Result<T, &'static str> {
    s.parse().map_err(|_| "A non-empty value is required.")
}

fn parse_amount(s: &str) -> Result<Money, &'static str> {
    let amount = Money::from_str(s)
        .ok()
        .filter(|m| !m.is_negative())
        .ok_or("Enter a valid number (e.g. 450.00 or 0).")?;
    if amount > MAX_AMOUNT {
        return Err("The amount is too large.");
    }
    Ok(amount)
}

fn parse_adjustment(s: &str) -> Option<Money> {
    Money::from_str(s)
        .ok()
        .filter(|m| m.amount().abs() <= MAX_AMOUNT.amount())
}

fn parse_count(s: &str) -> Result<Count, &'static str> {
    s.parse().map_err(|_| "Enter a whole number (e.g. 0 or 3).")
}

fn parse_floor(s: &str) -> Result<Floor, &'static str> {
    s.parse().map_err(|_| "Enter a whole number (e.g. -1 or 7).")
}

fn parse_positive(s: &str) -> Result<Decimal, &'static str> {
    let value = Money::from_str(s)
        .ok()
        .map(Money::amount)
        .filter(|d| d.is_sign_positive() && !d.is_zero())
        .ok_or("Enter a number greater than zero.")?;
    if value > MAX_AMOUNT.amount() {
        return Err("The amount is too large.");
    }
    Ok(value)
}

/// Checks whether the `answer` starts with any of the lowercase
/// `affirmative` prefixes.
fn is_affirmative(affirmative: &[String], answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    affirmative
        .iter()
        .any(|marker| answer.starts_with(marker.as_str()))
}

/// Error of a [`Prompter`].
#[derive(Debug, Display, StdError, From)]
pub enum Error {
    /// Input ended before all the answers were given.
    #[display("input ended before all the answers were given")]
    #[from(ignore)]
    Aborted,

    /// Console I/O failed.
    #[display("console I/O failed: {_0}")]
    Io(io::Error),

    /// Terminal prompt failed.
    #[display("terminal prompt failed: {_0}")]
    #[from(ignore)]
    Terminal(InquireError),
}

impl From<InquireError> for Error {
    fn from(e: InquireError) -> Self {
        match e {
            InquireError::OperationCanceled
            | InquireError::OperationInterrupted => Self::Aborted,
            InquireError::IO(e) => Self::Io(e),
            e => Self::Terminal(e),
        }
    }
}


#[cfg(test)]
mod spec {
    use std::{cell::RefCell, rc::Rc};

    use common::Money;
    use inquire::InquireError;
    use rust_decimal::Decimal;
    use service::domain::client;

    use super::{
        is_affirmative, parse_adjustment, parse_amount, parse_positive,
        script::Script, Error, Prompter, MAX_AMOUNT,
    };

    fn prompter(input: &str) -> (Prompter<Script>, Rc<RefCell<String>>) {
        let script = Script::new(input);
        let transcript = Rc::clone(&script.transcript);
        let prompter =
            Prompter::new(script, vec!["y".to_owned(), " S ".to_owned()]);
        (prompter, transcript)
    }

    #[test]
    fn reprompts_for_text() {
        let (mut p, transcript) = prompter("\n   \n  Ana Souza \n");

        let name: client::Name = p.text("Client name").unwrap();

        assert_eq!(name.as_ref(), "Ana Souza");
        assert_eq!(transcript.borrow().matches("Client name: ").count(), 3);
    }

    #[test]
    fn reprompts_for_amount() {
        let (mut p, transcript) = prompter("abc\n-10\n1,450.50\n");

        assert_eq!(
            p.amount("Condo fee").unwrap(),
            Money::new(Decimal::new(145_050, 2)),
        );
        assert_eq!(
            transcript.borrow().matches("Enter a valid number").count(),
            2,
        );
    }

    #[test]
    fn accepts_zero_amount() {
        let (mut p, _) = prompter("0\n");

        assert_eq!(p.amount("Property tax").unwrap(), Money::ZERO);
    }

    #[test]
    fn rejects_huge_amounts() {
        assert_eq!(parse_amount("1,000,000,000,000"), Ok(MAX_AMOUNT));
        assert_eq!(
            parse_amount("50000000000000000000000000000"),
            Err("The amount is too large."),
        );
        assert_eq!(
            parse_positive("79228162514264337593543950335"),
            Err("The amount is too large."),
        );
        assert_eq!(parse_adjustment("-1000000000000.01"), None);
        assert_eq!(
            parse_adjustment("-1000000000000"),
            Some(Money::from_units(-1_000_000_000_000)),
        );

        let (mut p, transcript) =
            prompter("50000000000000000000000000000\n450\n");
        assert_eq!(p.amount("Condo fee").unwrap(), Money::from_units(450));
        assert!(transcript.borrow().contains("The amount is too large."));
    }

    #[test]
    fn defaults_invalid_adjustment_to_zero() {
        let (mut p, transcript) =
            prompter("ten percent\n90000000000000000000000000000\n");

        assert_eq!(p.adjustment("Adjustment").unwrap(), Money::ZERO);
        assert_eq!(p.adjustment("Adjustment").unwrap(), Money::ZERO);
        assert_eq!(
            transcript.borrow().matches("Adjustment set to 0").count(),
            2,
        );
    }

    #[test]
    fn accepts_signed_adjustment() {
        let (mut p, _) = prompter("-100\n+25.5\n");

        assert_eq!(
            p.adjustment("Adjustment").unwrap(),
            Money::from_units(-100),
        );
        assert_eq!(
            p.adjustment("Adjustment").unwrap(),
            Money::new(Decimal::new(255, 1)),
        );
    }

    #[test]
    fn reprompts_for_numbers() {
        let (mut p, _) = prompter("-1\n2.5\n3\n-2\n");

        assert_eq!(p.count("Bedrooms").unwrap(), 3);
        assert_eq!(p.floor("Floor").unwrap(), -2);
    }

    #[test]
    fn reprompts_for_positive() {
        let (mut p, transcript) = prompter("0\n-5\nlarge\n72.5\n");

        assert_eq!(p.positive("Area").unwrap(), Decimal::new(725, 1));
        assert_eq!(
            transcript.borrow().matches("greater than zero").count(),
            3,
        );
    }

    #[test]
    fn confirms_by_prefix() {
        let (mut p, _) = prompter("y\nYes\nsim\nn\n\nok\n");

        assert!(p.confirm("Save?").unwrap());
        assert!(p.confirm("Save?").unwrap());
        assert!(p.confirm("Save?").unwrap());
        assert!(!p.confirm("Save?").unwrap());
        assert!(!p.confirm("Save?").unwrap());
        assert!(!p.confirm("Save?").unwrap());
    }

    #[test]
    fn matches_affirmative_markers() {
        let markers = ["y".to_owned(), "s".to_owned()];

        assert!(is_affirmative(&markers, "  Sim "));
        assert!(is_affirmative(&markers, "YES"));
        assert!(!is_affirmative(&markers, "no"));
        assert!(!is_affirmative(&markers, ""));
        assert!(!is_affirmative(&[], "y"));
    }

    #[test]
    fn aborts_on_end_of_input() {
        let (mut p, _) = prompter("abc\n");

        assert!(matches!(p.amount("Condo fee"), Err(Error::Aborted)));
        assert!(matches!(p.line("Anything"), Err(Error::Aborted)));
    }

    #[test]
    fn maps_terminal_errors() {
        assert!(matches!(
            Error::from(InquireError::OperationInterrupted),
            Error::Aborted,
        ));
        assert!(matches!(
            Error::from(InquireError::OperationCanceled),
            Error::Aborted,
        ));
        assert!(matches!(
            Error::from(InquireError::NotTTY),
            Error::Terminal(InquireError::NotTTY),
        ));
    }
}
