use std::process::Command;

/// Position and size of a connected output, in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Parse a `WxH+X+Y` token
fn parse_geometry(token: &str) -> Option<MonitorGeometry> {
    let (size, offsets) = token.split_once('+')?;
    let (w, h) = size.split_once('x')?;
    let (x, y) = offsets.split_once('+')?;
    Some(MonitorGeometry {
        x: x.parse().ok()?,
        y: y.parse().ok()?,
        width: w.parse().ok()?,
        height: h.parse().ok()?,
    })
}

fn first_geometry(line: &str) -> Option<MonitorGeometry> {
    line.split_whitespace().find_map(parse_geometry)
}

/// Pick the primary output from `xrandr --query` output, else the first connected one
pub fn parse_xrandr_output(output: &str) -> Option<MonitorGeometry> {
    output
        .lines()
        .filter(|line| line.contains(" connected primary "))
        .find_map(first_geometry)
        .or_else(|| {
            output
                .lines()
                .filter(|line| line.contains(" connected "))
                .find_map(first_geometry)
        })
}

pub fn detect_primary_monitor_xrandr() -> Option<MonitorGeometry> {
    let output = Command::new("xrandr").arg("--query").output().ok()?;
    if !output.status.success() {
        log::debug!("xrandr exited with {}", output.status);
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let geometry = parse_xrandr_output(&text);
    log::debug!("Detected monitor: {:?}", geometry);
    geometry
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Screen 0: minimum 320 x 200, current 4480 x 1440, maximum 16384 x 16384
HDMI-1 connected 1920x1080+0+180 (normal left inverted right x axis y axis) 527mm x 296mm
   1920x1080     60.00*+
DP-1 connected primary 2560x1440+1920+0 (normal left inverted right x axis y axis) 597mm x 336mm
   2560x1440     59.95*+
DP-2 disconnected (normal left inverted right x axis y axis)
";

    #[test]
    fn test_prefers_primary_output() {
        assert_eq!(
            parse_xrandr_output(SAMPLE),
            Some(MonitorGeometry { x: 1920, y: 0, width: 2560, height: 1440 })
        );
    }

    #[test]
    fn test_falls_back_to_first_connected() {
        let no_primary = SAMPLE.replace(" connected primary ", " connected ");
        assert_eq!(
            parse_xrandr_output(&no_primary),
            Some(MonitorGeometry { x: 0, y: 180, width: 1920, height: 1080 })
        );
    }

    #[test]
    fn test_connected_without_mode_is_skipped() {
        let text = "eDP-1 connected (normal left inverted right x axis y axis)\n";
        assert_eq!(parse_xrandr_output(text), None);
    }

    #[test]
    fn test_disconnected_is_not_connected() {
        assert_eq!(parse_xrandr_output("DP-2 disconnected 1920x1080+0+0\n"), None);
    }
}
