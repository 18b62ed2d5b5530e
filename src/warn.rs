//! Printing statements to stderr for debugging purposes

//! `warn!` always prints. `trace!` only prints if the `THTML_TRACE`
//! env var is set to a truthy value (read once, see
//! `util::getenv_bool`). `nowarn!` compiles a warning out completely.

use lazy_static::lazy_static;

use crate::util::getenv_bool;

lazy_static! {
    pub static ref TRACE: bool = getenv_bool("THTML_TRACE").unwrap_or_else(|e| {
        eprintln!("W: {e:#}, tracing stays off");
        false
    });
}

#[macro_export]
macro_rules! warn {
    ($formatstr:expr $(,$arg:expr)*) => { {
        use std::io::Write;
        let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
        let _ = write!(&mut outp, "W: ");
        let _ = write!(&mut outp, $formatstr $(,$arg)*);
        let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
        let _ = outp.flush();
    } }
}

#[macro_export]
macro_rules! nowarn {
    ($formatstr:expr $(,$arg:expr)*) => {
    }
}

#[macro_export]
macro_rules! trace {
    ($formatstr:expr $(,$arg:expr)*) => { {
        if *$crate::warn::TRACE {
            use std::io::Write;
            let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
            let _ = write!(&mut outp, "T: ");
            let _ = write!(&mut outp, $formatstr $(,$arg)*);
            let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
            let _ = outp.flush();
        }
    } }
}

#[macro_export]
macro_rules! time {
    ($name:expr; $($code:tt)*) => {{
        let msg = format!("time {}", $name);
        let now = std::time::Instant::now();
        let r = {
            $($code)*
        };
        let elapsed = now.elapsed();
        eprintln!("{msg}: {elapsed:?} at {:?} line {}", file!(), line!());
        r
    }}
}
