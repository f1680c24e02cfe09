/*
 * The console implementation of the platform layer. `ConsolePlatform` owns the
 * terminal streams, forwards events to the application logic, drains the
 * commands it queues, and executes them one at a time. Everything runs on the
 * calling thread: an event and every command and follow-up event it causes
 * are fully processed before the next user input is read.
 */
use super::command_executor;
use super::error::Result as PlatformResult;
use super::types::{AppEvent, PlatformCommand, PlatformEventHandler};
use crate::core::{CATEGORY_SLOT_COUNT, CATEGORY_SLOTS, FragmentList, SlotSelection, categories};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

const QUIT_INPUT: &str = "q";

pub struct ConsolePlatform<R: BufRead, W: Write> {
    input: R,
    output: W,
    auto_confirm: bool,
    // Rows of the result list as last shown; stands in for the native list control.
    listed_results: Vec<String>,
}

impl<R: BufRead, W: Write> ConsolePlatform<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsolePlatform {
            input,
            output,
            auto_confirm: false,
            listed_results: Vec::new(),
        }
    }

    // Accept every open confirmation without asking.
    pub fn with_auto_confirm(mut self, auto_confirm: bool) -> Self {
        self.auto_confirm = auto_confirm;
        self
    }

    pub fn listed_results(&self) -> &[String] {
        &self.listed_results
    }

    /*
     * Delivers `event` to the handler and executes every command it enqueues.
     * Follow-up events produced by commands (e.g. a confirmation answer) are
     * delivered after the current command queue has been drained.
     */
    pub fn dispatch(
        &mut self,
        handler: &mut dyn PlatformEventHandler,
        event: AppEvent,
    ) -> PlatformResult<()> {
        let mut pending_events = VecDeque::from([event]);
        while let Some(event) = pending_events.pop_front() {
            log::trace!("Platform: Dispatching {event:?}");
            handler.handle_event(event);
            while let Some(command) = handler.try_dequeue_command() {
                if let Some(follow_up) = self.execute_command(command)? {
                    pending_events.push_back(follow_up);
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn execute_command(&mut self, command: PlatformCommand) -> PlatformResult<Option<AppEvent>> {
        match command {
            PlatformCommand::ShowSearchResults { items } => {
                command_executor::execute_show_search_results(&mut self.output, &items)?;
                self.listed_results = items;
                Ok(None)
            }
            PlatformCommand::ClearResults => {
                self.listed_results.clear();
                command_executor::execute_clear_results(&mut self.output)?;
                Ok(None)
            }
            PlatformCommand::ShowMessageBox {
                title,
                message,
                severity,
            } => {
                command_executor::execute_show_message_box(
                    &mut self.output,
                    &title,
                    &message,
                    severity,
                )?;
                Ok(None)
            }
            PlatformCommand::ShowOpenConfirmation { path, display_name } => {
                let answer = command_executor::execute_show_open_confirmation(
                    &mut self.input,
                    &mut self.output,
                    &path,
                    &display_name,
                    self.auto_confirm,
                )?;
                Ok(Some(answer))
            }
            PlatformCommand::UpdateStatusText { text } => {
                command_executor::execute_update_status_text(&mut self.output, &text)?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> PlatformResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        command_executor::read_trimmed_line(&mut self.input)
    }

    /*
     * Prompts for every category slot and the free text. Returns `None` when the
     * user quits or the input ends. An unknown code re-prompts the same slot.
     */
    fn read_slot_selection(&mut self) -> PlatformResult<Option<SlotSelection>> {
        let mut selection = SlotSelection::default();
        for slot_index in 0..CATEGORY_SLOT_COUNT {
            let slot = CATEGORY_SLOTS[slot_index];
            let choices: Vec<String> = slot
                .codes
                .iter()
                .enumerate()
                .map(|(i, code)| format!("{}) {}", i + 1, code))
                .collect();
            let question = format!("{} [{}, Enter = any]: ", slot.label, choices.join(" "));
            loop {
                let Some(answer) = self.prompt(&question)? else {
                    return Ok(None);
                };
                if answer.trim() == QUIT_INPUT {
                    return Ok(None);
                }
                match categories::resolve_choice(slot_index, &answer) {
                    Some(code) => {
                        selection.slots[slot_index] = code;
                        break;
                    }
                    None => writeln!(
                        self.output,
                        "Unknown {} code '{}'.",
                        slot.label,
                        answer.trim()
                    )?,
                }
            }
        }

        let Some(free_text) = self.prompt("Barcode Input: ")? else {
            return Ok(None);
        };
        if free_text.trim() == QUIT_INPUT {
            return Ok(None);
        }
        selection.free_text = free_text;
        Ok(Some(selection))
    }

    /*
     * Runs the interactive session: select codes, search, optionally open one of
     * the results, repeat until the user enters 'q' or the input ends.
     */
    pub fn run_interactive(&mut self, handler: &mut dyn PlatformEventHandler) -> PlatformResult<()> {
        self.dispatch(handler, AppEvent::MainWindowReady)?;
        writeln!(self.output, "Enter 'q' at any prompt to quit.")?;

        loop {
            writeln!(self.output)?;
            let Some(selection) = self.read_slot_selection()? else {
                break;
            };
            let fragments = FragmentList::from_selection(&selection);
            self.dispatch(handler, AppEvent::SearchRequested { fragments })?;

            if self.listed_results().is_empty() {
                continue;
            }
            let Some(answer) = self.prompt("Open result # (Enter to search again): ")? else {
                break;
            };
            let answer = answer.trim();
            if answer == QUIT_INPUT {
                break;
            }
            if answer.is_empty() {
                continue;
            }
            match answer.parse::<usize>() {
                Ok(row) if row >= 1 => {
                    self.dispatch(handler, AppEvent::ResultActivated { index: row - 1 })?;
                }
                _ => writeln!(self.output, "'{answer}' is not a result number.")?,
            }
        }
        log::debug!("Platform: Interactive session ended.");
        Ok(())
    }
}
