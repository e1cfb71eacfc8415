use crate::utils::error::{Result, ThemeError};
use regex::Regex;

/// 標準 HSL → RGB 轉換。
///
/// 色相以度為單位，飽和度與亮度為 0.0-1.0。每個通道縮放到
/// 0-255 後無條件捨去小數。
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let (r, g, b) = if sector < 1.0 {
        (chroma, x, 0.0)
    } else if sector < 2.0 {
        (x, chroma, 0.0)
    } else if sector < 3.0 {
        (0.0, chroma, x)
    } else if sector < 4.0 {
        (0.0, x, chroma)
    } else if sector < 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    let m = lightness - chroma / 2.0;
    (
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

/// 轉成 `#rrggbb` 小寫十六進位字串
pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// 解析 `<degrees> <percent>% <percent>%` 形式的宣告值。
///
/// 回傳 `Ok(None)` 表示值不是 HSL 三元組（例如 `0.5rem`），
/// 呼叫端應原樣保留該行。形狀符合但數字解析失敗時回報錯誤。
fn parse_hsl_value(line_number: usize, value: &str) -> Result<Option<(f64, f64, f64)>> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    if tokens.len() != 3 {
        return Ok(None);
    }

    let saturation_raw = match tokens[1].strip_suffix('%') {
        Some(raw) => raw,
        None => return Ok(None),
    };
    let lightness_raw = match tokens[2].strip_suffix('%') {
        Some(raw) => raw,
        None => return Ok(None),
    };

    let parse = |raw: &str, component: &str| -> Result<f64> {
        raw.parse::<f64>().map_err(|_| ThemeError::InvalidHslError {
            line: line_number,
            value: value.to_string(),
            reason: format!("{} is not a number: '{}'", component, raw),
        })
    };

    let hue = parse(tokens[0], "hue")?;
    let saturation = parse(saturation_raw, "saturation")? / 100.0;
    let lightness = parse(lightness_raw, "lightness")? / 100.0;

    Ok(Some((hue, saturation, lightness)))
}

/// 改寫樣式表：把自定義屬性的 HSL 值換成十六進位顏色，
/// 其餘行原樣輸出。
pub fn normalize_stylesheet(content: &str) -> Result<String> {
    // 匹配 '--name: value;' 形式的自定義屬性宣告
    let declaration = Regex::new(r"^(\s*)(--[A-Za-z0-9-]+)\s*:\s*(.*?)\s*;\s*$").unwrap();

    let mut output = String::with_capacity(content.len());
    for (index, line) in content.lines().enumerate() {
        let rewritten = match declaration.captures(line) {
            Some(caps) => match parse_hsl_value(index + 1, &caps[3])? {
                Some((hue, saturation, lightness)) => {
                    let hex = hsl_to_hex(hue, saturation, lightness);
                    tracing::debug!("line {}: {} -> {}", index + 1, &caps[2], hex);
                    Some(format!("{}{}: {};", &caps[1], &caps[2], hex))
                }
                None => None,
            },
            None => None,
        };

        match rewritten {
            Some(new_line) => output.push_str(&new_line),
            None => output.push_str(line),
        }
        output.push('\n');
    }

    Ok(output)
}
