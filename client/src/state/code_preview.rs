//! Playback state for the live code preview: typed snippet and terminal run.

#[cfg(test)]
#[path = "code_preview_test.rs"]
mod code_preview_test;

use std::time::Duration;

use crate::util::highlight::line_count;

pub const TYPE_START_DELAY: Duration = Duration::from_millis(500);
pub const TYPE_CHAR_DELAY: Duration = Duration::from_millis(15);
pub const OUTPUT_START_DELAY: Duration = Duration::from_millis(500);
pub const OUTPUT_LINE_DELAY: Duration = Duration::from_millis(300);
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

pub const ARCHITECT_SNIPPET: &str = r#"// Adam's Software Architecture Blueprint
class SoftwareArchitect {
  constructor() {
    this.name = "Adam Smith";
    this.role = "Head of Software Engineering";
    this.expertise = [
      "System Design",
      "Cloud Architecture",
      "Team Leadership",
      "AI/ML Integration"
    ];
    this.yearsOfExperience = 10;
  }

  async buildScalableSystem(requirements) {
    const architecture = await this.design(requirements);
    const infrastructure = this.setupCloud(architecture);
    const team = this.assembleTeam(requirements.complexity);

    return {
      architecture,
      infrastructure,
      team,
      deliveryDate: this.calculateTimeline()
    };
  }

  getPhilosophy() {
    return "Clean code, scalable systems, happy teams.";
  }
}

// Initialize the architect
const adam = new SoftwareArchitect();
console.log(adam.getPhilosophy());"#;

pub const ARCHITECT_OUTPUT: &[&str] = &[
    "> Initializing Software Architect...",
    "> Loading expertise modules...",
    "✓ System Design: Ready",
    "✓ Cloud Architecture: Ready",
    "✓ Team Leadership: Ready",
    "✓ AI/ML Integration: Ready",
    "> Philosophy loaded:",
    "\"Clean code, scalable systems, happy teams.\"",
    "> Architect ready for deployment! 🚀",
];

/// Reveals a snippet one character per tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTyper {
    snippet: &'static str,
    /// Byte offset of the revealed prefix; always a char boundary.
    cursor: usize,
}

impl CodeTyper {
    pub fn new(snippet: &'static str) -> Self {
        Self { snippet, cursor: 0 }
    }

    pub fn displayed(&self) -> &'static str {
        &self.snippet[..self.cursor]
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.snippet.len()
    }

    /// Reveal one more character. Returns `false` once the snippet is complete.
    pub fn tick(&mut self) -> bool {
        if let Some(c) = self.snippet[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
        !self.is_done()
    }

    /// 1-based line holding the cursor; `0` before typing starts.
    pub fn current_line(&self) -> usize {
        if self.cursor == 0 { 0 } else { line_count(self.displayed()) }
    }

    pub fn total_lines(&self) -> usize {
        line_count(self.snippet)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineMark {
    /// The line the cursor is on.
    Active,
    Typed,
    Pending,
}

/// Gutter marker for 1-based `line` given the cursor line.
pub fn line_mark(line: usize, current_line: usize) -> LineMark {
    if line == current_line {
        LineMark::Active
    } else if line < current_line {
        LineMark::Typed
    } else {
        LineMark::Pending
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    Success,
    Info,
    Plain,
}

pub fn line_kind(line: &str) -> OutputKind {
    if line.starts_with('✓') {
        OutputKind::Success
    } else if line.starts_with('>') {
        OutputKind::Info
    } else {
        OutputKind::Plain
    }
}

/// Terminal output printed line by line after pressing run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalRun {
    lines: &'static [&'static str],
    printed: usize,
    running: bool,
}

impl TerminalRun {
    pub fn new(lines: &'static [&'static str]) -> Self {
        Self { lines, printed: 0, running: false }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clear output and start a run. Ignored while already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.printed = 0;
        self.running = true;
        true
    }

    /// Print the next line. Returns `false` when the run has finished.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.printed < self.lines.len() {
            self.printed += 1;
            true
        } else {
            self.running = false;
            false
        }
    }

    pub fn output(&self) -> &'static [&'static str] {
        &self.lines[..self.printed]
    }
}
