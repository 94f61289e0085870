use owo_colors::OwoColorize;

/// Consistent, coloured user-facing messages. Colours only when stdout is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {msg}");
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {msg}");
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {msg}");
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {msg}");
    }
}

/// One rename line, `old -> new`. Unprefixed so it can be scripted against.
pub fn print_rename(from: &str, to: &str) {
    if is_tty() {
        println!("{} {} {}", from, "->".dimmed(), to.bold());
    } else {
        println!("{from} -> {to}");
    }
}

/// Plain line with no prefix.
pub fn print_user(msg: &str) {
    println!("{msg}");
}
