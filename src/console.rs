//! Line-oriented console front end for the translation list.
//!
//! Parsing and rendering are pure functions. [`execute`] applies one parsed
//! command to the controller and returns what to print. [`ConsoleNotifier`]
//! is the [`NotificationPort`] that prints alerts and reads yes/no answers
//! from the same input the command loop uses.

use async_trait::async_trait;
use std::fmt::Write as _;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::Mutex;

use crate::controller::TranslationListController;
use crate::i18n::{LanguageCodec, ViewStrings};
use crate::navigation::HeaderMenu;
use crate::notify::{AlertKind, Confirmation, NotificationPort};
use crate::record::TranslationRecord;

pub const HELP: &str = "\
Commands:
  list                    show the current page
  search [text]           filter by text or language name (empty clears)
  page <n> | next | prev  move between pages
  add                     open the form for a new translation
  edit <id>               open the form for an existing translation
  set <field> <value>     field: original | translated | from | to
  save | cancel           submit or discard the form
  delete <id>             delete a translation (asks first)
  show <id>               fetch one translation from the backend
  languages               list selectable languages
  menu [admin|loans]      show or toggle the header menus
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Original,
    Translated,
    From,
    To,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    Page(usize),
    Next,
    Prev,
    Add,
    Edit(i64),
    Set(FormField, String),
    Save,
    Cancel,
    Delete(i64),
    Show(i64),
    Languages,
    Menu(Option<String>),
    Help,
    Quit,
}

fn parse_id(arg: &str) -> Result<i64, String> {
    arg.trim()
        .parse()
        .map_err(|_| format!("not a valid id: {:?}", arg.trim()))
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name.to_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "search" | "find" => Ok(Command::Search(rest.to_string())),
        "page" => rest
            .parse()
            .map(Command::Page)
            .map_err(|_| format!("not a valid page: {:?}", rest)),
        "next" => Ok(Command::Next),
        "prev" => Ok(Command::Prev),
        "add" | "new" => Ok(Command::Add),
        "edit" => parse_id(rest).map(Command::Edit),
        "set" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map(|(f, v)| (f, v.trim()))
                .unwrap_or((rest, ""));
            let field = match field.to_lowercase().as_str() {
                "original" => FormField::Original,
                "translated" => FormField::Translated,
                "from" => FormField::From,
                "to" => FormField::To,
                other => return Err(format!("unknown field: {:?}", other)),
            };
            Ok(Command::Set(field, value.to_string()))
        }
        "save" => Ok(Command::Save),
        "cancel" => Ok(Command::Cancel),
        "delete" | "rm" => parse_id(rest).map(Command::Delete),
        "show" => parse_id(rest).map(Command::Show),
        "languages" => Ok(Command::Languages),
        "menu" => Ok(Command::Menu((!rest.is_empty()).then(|| rest.to_lowercase()))),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command: {:?} (try help)", other)),
    }
}

/// Language field input: a full name, or a code that gets expanded.
pub fn language_input(value: &str) -> String {
    let expanded = LanguageCodec::expand(&value.to_uppercase());
    if expanded.is_empty() {
        value.to_string()
    } else {
        expanded.to_string()
    }
}

/// Map a typed answer to a confirmation; `None` means the input ended.
pub fn parse_confirmation(answer: Option<&str>) -> Confirmation {
    match answer.map(|a| a.trim().to_lowercase()) {
        Some(a) if matches!(a.as_str(), "y" | "yes" | "s" | "si" | "sí") => Confirmation::Confirmed,
        Some(a) if matches!(a.as_str(), "n" | "no") => Confirmation::Cancelled,
        _ => Confirmation::Dismissed,
    }
}

fn language_label(code: &str) -> String {
    match LanguageCodec::expand(code) {
        "" => code.to_string(),
        name => name.to_string(),
    }
}

pub fn render_record(record: &TranslationRecord) -> String {
    format!(
        "#{} [{} -> {}] {} => {}",
        record.id,
        language_label(&record.from_language),
        language_label(&record.to_language),
        record.original_text,
        record.translated_text
    )
}

/// Everything the list view currently shows.
pub fn render(controller: &TranslationListController) -> String {
    let mut out = String::new();

    if let Some(message) = controller.success_message() {
        let _ = writeln!(out, "✓ {}", message);
    }

    let _ = writeln!(
        out,
        "Page {} of {} ({} translations{})",
        controller.current_page(),
        controller.page_count().max(1),
        controller.total_records(),
        if controller.search_query().is_empty() {
            String::new()
        } else {
            format!(", search {:?}", controller.search_query())
        }
    );

    if controller.displayed_translations().is_empty() {
        let _ = writeln!(out, "  (nothing to show)");
    }
    for record in controller.displayed_translations() {
        let _ = writeln!(out, "  {}", render_record(record));
    }

    if controller.show_form() {
        let selected = controller.selected_translation();
        let strings = ViewStrings::get();
        let _ = writeln!(out);
        if selected.is_persisted() {
            let _ = writeln!(out, "Editing #{}", selected.id);
        } else {
            let _ = writeln!(out, "{}: {}", strings.form_title, strings.form_subtitle);
        }
        let _ = writeln!(out, "  original:   {}", selected.original_text);
        let _ = writeln!(out, "  translated: {}", selected.translated_text);
        let _ = writeln!(out, "  from:       {}", selected.from_language);
        let _ = writeln!(out, "  to:         {}", selected.to_language);
    }

    out
}

pub fn render_menu(menu: &HeaderMenu) -> String {
    let mark = |open: bool| if open { "▾" } else { "▸" };

    let mut out = format!("{} Administración\n", mark(menu.admin_open()));
    if menu.admin_open() {
        out.push_str("    Traductor (admin/traductor)\n");
    }
    out.push_str(&format!("{} Préstamos", mark(menu.loans_open())));
    out
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Quit,
    Output(String),
}

/// Apply `command` to the list view and the header menu.
pub async fn execute(
    controller: &mut TranslationListController,
    menu: &mut HeaderMenu,
    command: Command,
) -> Reply {
    let mut out = String::new();

    match command {
        Command::Quit => return Reply::Quit,
        Command::Help => return Reply::Output(format!("{}\n", HELP)),
        Command::Languages => {
            return Reply::Output(format!("{}\n", controller.languages().join(", ")))
        }
        Command::Menu(target) => {
            match target.as_deref() {
                Some("admin") => {
                    menu.toggle_admin();
                }
                Some("loans") => {
                    menu.toggle_loans();
                }
                Some(other) => {
                    let _ = writeln!(out, "unknown menu: {:?}", other);
                }
                None => {}
            }
            let _ = writeln!(out, "{}", render_menu(menu));
            return Reply::Output(out);
        }
        Command::Show(id) => {
            if let Some(record) = controller.fetch_record(id).await {
                let _ = writeln!(out, "{}", render_record(&record));
            }
            return Reply::Output(out);
        }
        Command::Set(field, value) => {
            if !controller.show_form() {
                return Reply::Output("no form open (use add or edit first)\n".to_string());
            }
            let form = controller.form();
            match field {
                FormField::Original => form.set_original_text(value),
                FormField::Translated => form.set_translated_text(value),
                FormField::From => form.set_from_language(language_input(&value)),
                FormField::To => form.set_to_language(language_input(&value)),
            }
        }
        Command::List => {}
        Command::Search(query) => controller.search(&query),
        Command::Page(n) => controller.go_to_page(n),
        Command::Next => controller.go_to_page(controller.current_page() + 1),
        Command::Prev => controller.go_to_page(controller.current_page().saturating_sub(1)),
        Command::Add => controller.begin_add(),
        Command::Edit(id) => {
            if !controller.begin_edit_by_id(id) {
                let _ = writeln!(out, "no translation #{} in the list", id);
            }
        }
        Command::Save => {
            controller.submit().await;
        }
        Command::Cancel => controller.cancel(),
        Command::Delete(id) => {
            controller.delete_record(id).await;
        }
    }

    out.push_str(&render(controller));
    Reply::Output(out)
}

/// Shared line reader for commands and confirmation answers.
pub struct LineInput<R> {
    lines: Mutex<Lines<R>>,
}

impl<R: AsyncBufRead + Unpin + Send> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
        }
    }

    /// Next line, or `None` at end of input or on a read error.
    pub async fn next_line(&self) -> Option<String> {
        match self.lines.lock().await.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                None
            }
        }
    }
}

pub struct ConsoleNotifier<R> {
    input: std::sync::Arc<LineInput<R>>,
}

impl<R> ConsoleNotifier<R> {
    pub fn new(input: std::sync::Arc<LineInput<R>>) -> Self {
        Self { input }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send + 'static> NotificationPort for ConsoleNotifier<R> {
    async fn alert(&self, kind: AlertKind, title: &str, message: &str) {
        println!("[{}] {}: {}", kind, title, message);
    }

    async fn confirm(&self, title: &str, message: &str) -> Confirmation {
        println!("{} {} [y/n]", title, message);
        let answer = self.input.next_line().await;
        parse_confirmation(answer.as_deref())
    }
}
