//! Live code preview: a snippet typed out with syntax highlighting, a copy
//! button and a run button that prints simulated terminal output.

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::state::code_preview::{
    ARCHITECT_OUTPUT, ARCHITECT_SNIPPET, CodeTyper, LineMark, OutputKind, TerminalRun, line_kind, line_mark,
};
use crate::state::reveal::{CODE_PREVIEW_THRESHOLD, stagger_style};
use crate::util::highlight::tokenize;
use crate::util::viewport::use_entrance;

const TECH_TAGS: &[&str] = &["JavaScript", "TypeScript", "React", "Node.js", "Python", "Go", "Rust", "SQL"];

fn output_class(line: &str) -> &'static str {
    match line_kind(line) {
        OutputKind::Success => "terminal-line success",
        OutputKind::Info => "terminal-line info",
        OutputKind::Plain => "terminal-line",
    }
}

#[component]
pub fn CodeEditor() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let entered = use_entrance(node, CODE_PREVIEW_THRESHOLD);
    let typer = RwSignal::new(CodeTyper::new(ARCHITECT_SNIPPET));
    let run = RwSignal::new(TerminalRun::new(ARCHITECT_OUTPUT));
    let copied = RwSignal::new(false);
    let total_lines = typer.with_untracked(CodeTyper::total_lines);

    #[cfg(feature = "hydrate")]
    let alive = crate::util::liveness::Liveness::until_cleanup();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::code_preview::{TYPE_CHAR_DELAY, TYPE_START_DELAY};
        use crate::util::liveness::sleep;

        let alive = alive.clone();
        Effect::new(move |_| {
            if !entered.get() {
                return;
            }
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                sleep(TYPE_START_DELAY).await;
                while alive.is_alive() {
                    match typer.try_update(CodeTyper::tick) {
                        Some(true) => sleep(TYPE_CHAR_DELAY).await,
                        _ => break,
                    }
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entered;
    }

    let on_copy = {
        #[cfg(feature = "hydrate")]
        let alive = alive.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                use crate::state::code_preview::COPY_FEEDBACK;
                use crate::util::liveness::sleep;

                if let Some(window) = web_sys::window() {
                    if let Some(clipboard) = window.navigator().clipboard() {
                        let _ = clipboard.write_text(ARCHITECT_SNIPPET);
                        copied.set(true);
                        let alive = alive.clone();
                        leptos::task::spawn_local(async move {
                            sleep(COPY_FEEDBACK).await;
                            if alive.is_alive() {
                                copied.set(false);
                            }
                        });
                    }
                }
            }
        }
    };

    let on_run = move |_| {
        if run.try_update(TerminalRun::start) != Some(true) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use crate::state::code_preview::{OUTPUT_LINE_DELAY, OUTPUT_START_DELAY};
            use crate::util::liveness::sleep;

            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                sleep(OUTPUT_START_DELAY).await;
                while alive.is_alive() {
                    match run.try_update(TerminalRun::tick) {
                        Some(true) => sleep(OUTPUT_LINE_DELAY).await,
                        _ => break,
                    }
                }
            });
        }
    };

    let current_line = Memo::new(move |_| typer.with(CodeTyper::current_line));

    view! {
        <section class="code-editor-section" node_ref=node class:in-view=move || entered.get()>
            <div class="container">
                <SectionHeading title="Live Code Preview" subtitle="Watch the architecture come to life"/>

                <div class="editor-container">
                    <div class="code-window reveal">
                        <div class="window-header">
                            <div class="window-buttons">
                                <span class="window-btn close"></span>
                                <span class="window-btn minimize"></span>
                                <span class="window-btn maximize"></span>
                            </div>
                            <div class="window-title">
                                <span class="window-icon">">_"</span>
                                <span>"architect.js"</span>
                            </div>
                            <div class="window-actions">
                                <button class="action-btn" title="Copy code" on:click=on_copy>
                                    {move || if copied.get() { "✓" } else { "⧉" }}
                                </button>
                                <button
                                    class="action-btn run-btn"
                                    title="Run"
                                    on:click=on_run
                                    disabled=move || run.with(TerminalRun::is_running)
                                >
                                    "▶"
                                </button>
                            </div>
                        </div>

                        <div class="code-area">
                            <div class="line-numbers">
                                {(1..=total_lines)
                                    .map(|line| {
                                        let mark = move || line_mark(line, current_line.get());
                                        view! {
                                            <span
                                                class="line-number"
                                                class:active=move || mark() == LineMark::Active
                                                class:typed=move || mark() != LineMark::Pending
                                            >
                                                {line}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <pre class="code-content">
                                <code>
                                    {move || {
                                        typer
                                            .with(|t| tokenize(t.displayed()))
                                            .into_iter()
                                            .map(|span| view! { <span class=span.kind.class()>{span.text}</span> })
                                            .collect_view()
                                    }}
                                </code>
                                <span class="cursor">"|"</span>
                            </pre>
                        </div>

                        <Show when=move || run.with(|r| !r.output().is_empty())>
                            <div class="terminal-output">
                                <div class="terminal-header">
                                    <span>"Terminal Output"</span>
                                </div>
                                <pre class="terminal-content">
                                    {move || {
                                        run.with(|r| {
                                            r.output()
                                                .iter()
                                                .map(|line| view! { <div class=output_class(line)>{*line}</div> })
                                                .collect_view()
                                        })
                                    }}
                                </pre>
                            </div>
                        </Show>
                    </div>

                    <div class="editor-decorations" aria-hidden="true">
                        <div class="floating-bracket bracket-1">"{ }"</div>
                        <div class="floating-bracket bracket-2">"< />"</div>
                        <div class="floating-bracket bracket-3">"( )"</div>
                    </div>
                </div>

                <div class="tech-tags">
                    {TECH_TAGS
                        .iter()
                        .enumerate()
                        .map(|(i, tech)| view! { <span class="tech-tag reveal" style=stagger_style(1200, 100, i)>{*tech}</span> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
