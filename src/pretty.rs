use crate::ui::splash::LOGO_NAME;

macro_rules! print_cmd_error {
    ($tt:tt) => {
        println!("\x1b[1;31m[ERROR!!!] {}\x1b[0m", $tt);
    };
    ($tt:tt, $($tts:tt)+) => {
        println!("\x1b[1;31m[ERROR!!!] {}\x1b[0m", $tt);
        println!("\x1b[1;31m[ERROR!!!]\x1b[0m Start details...");
        println!("{}", core::format_args!($($tts)*));
        println!("\x1b[1;31m[ERROR!!!]\x1b[0m End details.\n");
    }
}

macro_rules! handle_cmd_error {
    ($err:tt, $tt:tt) => {{
        print_cmd_error!($tt);
        format!("{}", $err)
    }};
}

macro_rules! print_cmd_info {
    ($tt:tt, $($tts:tt)*) => {
        println!("\x1b[1;33m[INFO!!!] {}\x1b[0m", $tt);
        println!("{}", core::format_args!($($tts)*));
    }
}

/// Banner printed before one-shot command output.
pub(crate) fn print_banner() {
    // RGB: 25 = 37, 63 = 99, EB = 235
    println!("\x1b[38;2;37;99;235m{}\x1b[0m", LOGO_NAME);
}

pub(crate) use handle_cmd_error;
pub(crate) use print_cmd_error;
pub(crate) use print_cmd_info;
