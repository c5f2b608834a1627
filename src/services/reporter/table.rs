//! 纯文本表格
//!
//! 单元格右对齐，中文按两个字符宽度计算

use std::io::{self, Write};

use crate::config::DisplayConfig;

/// 列之间的间隔
const COLUMN_GAP: &str = "  ";

pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// 输出表格，`max_rows`/`max_width` 未设置时不截断
    pub fn render(&self, display: &DisplayConfig, out: &mut dyn Write) -> io::Result<()> {
        let shown = match display.max_rows {
            Some(max) => self.rows.len().min(max),
            None => self.rows.len(),
        };
        let widths = self.column_widths(shown);

        self.write_line(&self.headers, &widths, display, out)?;
        for row in &self.rows[..shown] {
            self.write_line(row, &widths, display, out)?;
        }

        if shown < self.rows.len() {
            writeln!(out, "... 共 {} 行，仅显示前 {} 行", self.rows.len(), shown)?;
        }
        Ok(())
    }

    fn column_widths(&self, shown: usize) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows[..shown] {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(display_width(cell));
                }
            }
        }
        widths
    }

    fn write_line(
        &self,
        cells: &[String],
        widths: &[usize],
        display: &DisplayConfig,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let mut line = String::new();
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            line.push_str(&" ".repeat(width.saturating_sub(display_width(cell))));
            line.push_str(cell);
        }

        match display.max_width {
            Some(max) => writeln!(out, "{}", truncate_to_width(&line, max)),
            None => writeln!(out, "{}", line),
        }
    }
}

/// 字符串显示宽度
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

fn char_width(c: char) -> usize {
    match c as u32 {
        // 组合符号和零宽字符
        0x0300..=0x036F | 0x200B..=0x200F | 0xFE00..=0xFE0F => 0,
        0x1100..=0x115F
        | 0x2329..=0x232A
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1F64F
        | 0x1F680..=0x1F6FF
        | 0x1F900..=0x1F9FF
        | 0x20000..=0x3FFFD => 2,
        _ => 1,
    }
}

/// 按显示宽度截断
pub fn truncate_to_width(s: &str, max: usize) -> &str {
    let mut width = 0;
    for (index, c) in s.char_indices() {
        width += char_width(c);
        if width > max {
            return &s[..index];
        }
    }
    s
}
