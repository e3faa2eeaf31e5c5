//! Manpage generation.
//!
//! Responsibilities:
//! - Render the `gckb(1)` page that the usage text points to.
//!
//! Does NOT handle:
//! - Installing the page (redirect the output into a `man1` directory).
//!
//! Invariants:
//! - Output is always written to the given writer, never to a file.

use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;

/// Writes the roff manpage for gckb to `out`.
pub fn run(out: &mut impl Write) -> Result<()> {
    let man = clap_mangen::Man::new(crate::args::Cli::command());

    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;
    buffer.extend_from_slice(VERBS_SECTION.as_bytes());
    buffer.extend_from_slice(EXIT_STATUS_SECTION.as_bytes());

    out.write_all(&buffer)?;
    out.flush()?;
    Ok(())
}

const VERBS_SECTION: &str = r".SH VERBS
.TP
\fBlist\fR
Print every custom keybinding as a tab separated line of index, name, command and binding.
.TP
\fBadd\fR \fIname\fR \fIcommand\fR \fIbinding\fR
Register a new custom keybinding. The binding needs at least one of
<Ctrl>, <Alt>, <Shift>, <Super> or <Primary> followed by a key, e.g. <Ctrl><Alt>t.
Names and bindings must be unique.
.TP
\fBdelete\fR [\fIindex\fR]
Delete the keybinding at \fIindex\fR as shown by \fBlist\fR, or every custom keybinding if omitted.
";

const EXIT_STATUS_SECTION: &str = r".SH EXIT STATUS
.TP
\fB0\fR
Success - command completed successfully.
.TP
\fB1\fR
Bad usage, invalid input, or a rejected change. Nothing was written.
.TP
\fB2\fR
The settings store could not be read or written.
";
