use core::fmt;

use super::message::Message;

/// Interal type for printing a message in dig style
///
/// This is only exposed to users of this library as `impl fmt::Display`.
pub(super) struct DigPrinter<'a> {
    pub msg: &'a Message,
}

impl fmt::Display for DigPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.msg;

        // Header
        let flags = msg.flags();
        let counts = msg.counts();

        writeln!(f, ";; from {}", msg.source())?;
        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, rcode: {}, id: {}",
            flags.opcode,
            flags.rcode,
            msg.id()
        )?;
        write!(f, ";; flags: {}", flags)?;
        writeln!(
            f,
            "; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            counts.qdcount, counts.ancount, counts.nscount, counts.arcount
        )?;

        // Question
        if !msg.questions().is_empty() {
            writeln!(f, "\n;; QUESTION SECTION:")?;
            for item in msg.questions() {
                writeln!(f, "; {}", item)?;
            }
        }

        // Answer
        if !msg.answers().is_empty() {
            writeln!(f, "\n;; ANSWER SECTION:")?;
            for item in msg.answers() {
                writeln!(f, "{}", item)?;
            }
        }

        Ok(())
    }
}
