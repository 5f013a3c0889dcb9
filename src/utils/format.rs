use std::time::Duration;

/// Render an elapsed time in the coarsest unit that gives a non-zero value
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis > 0 {
        return format!("(milliseconds): {}", millis);
    }

    let micros = elapsed.as_micros();
    if micros > 0 {
        return format!("(microseconds): {}", micros);
    }

    format!("(nanoseconds): {}", elapsed.as_nanos())
}

pub fn format_solution_count(count: usize) -> String {
    match count {
        0 => "No solution".to_string(),
        1 => "1 solution".to_string(),
        n => format!("{} solutions", n),
    }
}
