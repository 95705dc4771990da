// Totalizer consumption delta across the window boundary.
// Client rule: initial = previous-window MAX, final = current-window MAX,
// cumulative = final - initial. Either side missing defaults to 0 before
// subtraction, so the first run after a channel is added can report an
// inflated delta (known limitation, not corrected). Negative cumulative
// (meter reset or rollover) passes through unmodified.

use crate::models::TotalizerDelta;

pub fn delta(channel: &str, final_max: Option<f64>, carry_max: Option<f64>) -> TotalizerDelta {
    let initial = carry_max.unwrap_or(0.0);
    let final_value = final_max.unwrap_or(0.0);
    TotalizerDelta {
        channel: channel.to_string(),
        initial,
        final_value,
        cumulative: final_value - initial,
    }
}
