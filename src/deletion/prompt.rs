use std::io::{self, BufRead, Write};

/// Answer state of the delete confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
    Pending,
}

impl Confirmation {
    /// Maps one line read from the input. `None` means the input is closed,
    /// which never counts as a yes.
    pub fn from_response(response: Option<&str>) -> Self {
        let Some(response) = response else {
            return Confirmation::Declined;
        };

        match response.trim().to_lowercase().as_str() {
            "y" => Confirmation::Confirmed,
            "n" => Confirmation::Declined,
            _ => Confirmation::Pending,
        }
    }
}

/// Best-effort discard of input typed before a prompt was shown.
///
/// This only reaches the OS-level terminal queue. Lines the reader has already
/// pulled into its own buffer (e.g. the `BufReader` inside `StdinLock`) are
/// kept and may still answer the next prompt.
pub trait InputFlush {
    fn discard_pending(&self);
}

/// Used where the platform has no way to drop buffered input.
pub struct NoFlush;

impl InputFlush for NoFlush {
    fn discard_pending(&self) {}
}

#[cfg(unix)]
pub struct TerminalFlush;

#[cfg(unix)]
impl InputFlush for TerminalFlush {
    fn discard_pending(&self) {
        use std::io::IsTerminal as _;

        if !io::stdin().is_terminal() {
            return;
        }

        // failure only means there was nothing we could drop
        unsafe {
            libc::tcflush(libc::STDIN_FILENO, libc::TCIFLUSH);
        }
    }
}

pub fn platform_flush() -> Box<dyn InputFlush> {
    #[cfg(unix)]
    {
        Box::new(TerminalFlush)
    }
    #[cfg(not(unix))]
    {
        Box::new(NoFlush)
    }
}

pub fn prompt_text(count: usize) -> String {
    format!("Delete these {count} files? [y/n] ")
}

/// Asks until a valid answer arrives or the input ends.
pub fn confirm<R, W>(
    input: &mut R,
    output: &mut W,
    flush: &dyn InputFlush,
    count: usize,
) -> io::Result<Confirmation>
where
    R: BufRead,
    W: Write,
{
    let mut decision = Confirmation::Pending;

    while decision == Confirmation::Pending {
        flush.discard_pending();

        write!(output, "{}", prompt_text(count))?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;

        decision = if read == 0 {
            Confirmation::from_response(None)
        } else {
            Confirmation::from_response(Some(line.as_str()))
        };
    }

    Ok(decision)
}
