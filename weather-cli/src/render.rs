use weather_core::{Placeholder, PresentationDescriptor, TemperatureUnit};

pub fn descriptor(d: &PresentationDescriptor, unit: TemperatureUnit) -> String {
    let mut out = format!(
        "{}\n{}{}  {}",
        d.location_label,
        d.temperature(unit),
        unit.symbol(),
        d.condition_text
    );

    if let Some(icon) = &d.icon_name {
        out.push_str(&format!("\nicon: {icon}"));
    }
    if let Some(color) = d.color {
        out.push_str(&format!("\nbackground: {color} ({})", color.hex()));
    }

    out.push_str(&format!("\nupdated {}", d.updated_at.format("%Y-%m-%d %H:%M UTC")));
    out
}

pub fn placeholder(p: &Placeholder) -> String {
    let mut out = p.location_text.clone();
    if let Some(temp) = p.temperature_text {
        out.push_str(&format!("\n{temp}  {}", p.condition_text));
    }
    out.push_str(&format!("\nicon: {}", p.icon_name));
    out
}
