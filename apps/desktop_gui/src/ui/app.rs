use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use client_core::{
    view::{EMPTY_STATE_HINT, EMPTY_STATE_TITLE, LOADING_TEXT},
    Avatar, Command, EmployeeCard, EmployeeForm, FormError, ListView, ManagerState,
    NotificationKind, NotificationPhase,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::TextureHandle;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{dispatch_backend_command, submit_command};

const AVATAR_SIZE: f32 = 48.0;
const FADE_FRAME: Duration = Duration::from_millis(16);
const IDLE_REPAINT: Duration = Duration::from_millis(250);
const SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(40, 167, 69);
const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(220, 53, 69);
const AVATAR_FILL: egui::Color32 = egui::Color32::from_rgb(102, 126, 234);

enum AvatarState {
    Pending,
    Ready(TextureHandle),
    Failed,
}

pub struct EmployeeManagerApp {
    state: ManagerState,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    server_url: String,
    search_input: String,
    create_error: Option<FormError>,
    edit_error: Option<FormError>,
    avatars: HashMap<String, AvatarState>,
}

impl EmployeeManagerApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        server_url: String,
    ) -> Self {
        let mut app = Self {
            state: ManagerState::new(),
            cmd_tx,
            ui_rx,
            server_url,
            search_input: String::new(),
            create_error: None,
            edit_error: None,
            avatars: HashMap::new(),
        };
        app.run(Command::Load);
        app
    }

    fn run(&mut self, command: Command) -> Result<(), FormError> {
        submit_command(&mut self.state, &self.cmd_tx, command)
    }

    fn process_ui_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Outcome(outcome) => self.state.apply(outcome, Instant::now()),
                UiEvent::AvatarLoaded { url, image } => {
                    let texture = ctx.load_texture(
                        format!("avatar:{url}"),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.avatars.insert(url, AvatarState::Ready(texture));
                }
                UiEvent::AvatarFailed { url } => {
                    self.avatars.insert(url, AvatarState::Failed);
                }
                UiEvent::BackendFailed(message) => {
                    self.state.report_error(message, Instant::now());
                }
            }
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Employee Manager");
                ui.weak(&self.server_url);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let search = ui.add(
                        egui::TextEdit::singleline(&mut self.search_input)
                            .hint_text("Search employees...")
                            .desired_width(260.0),
                    );
                    if search.changed() {
                        let _ = self.run(Command::Search(self.search_input.clone()));
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_create_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("add_employee")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Add Employee");
                ui.add_space(8.0);
                form_fields(ui, "create_form", &mut self.state.create_form);
                show_form_error(ui, self.create_error.as_ref());
                ui.add_space(8.0);
                if ui.button("Add Employee").clicked() {
                    self.create_error = self.run(Command::SubmitCreate).err();
                }
            });
    }

    fn show_employee_list(&mut self, ctx: &egui::Context) {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| match self.state.view() {
            ListView::Loading => {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label(LOADING_TEXT);
                });
            }
            ListView::Empty => {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.heading(EMPTY_STATE_TITLE);
                    ui.label(EMPTY_STATE_HINT);
                });
            }
            ListView::Cards(cards) => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for card in &cards {
                            self.show_card(ui, card, &mut actions);
                            ui.add_space(8.0);
                        }
                    });
            }
        });

        for command in actions {
            if matches!(command, Command::BeginEdit(_)) {
                self.edit_error = None;
            }
            let _ = self.run(command);
        }
    }

    fn show_card(&mut self, ui: &mut egui::Ui, card: &EmployeeCard, actions: &mut Vec<Command>) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                self.show_avatar(ui, &card.avatar);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&card.name).strong().size(16.0));
                    ui.label(&card.job_title);
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Delete").clicked() {
                        actions.push(Command::BeginDelete(card.id));
                    }
                    if ui.button("Edit").clicked() {
                        actions.push(Command::BeginEdit(card.id));
                    }
                });
            });
            ui.separator();
            egui::Grid::new(("card_details", card.id.0))
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.weak("Email");
                    ui.label(&card.email);
                    ui.end_row();
                    ui.weak("Phone");
                    ui.label(&card.phone);
                    ui.end_row();
                    ui.weak("Employee code");
                    ui.label(card.employee_code.as_deref().unwrap_or("n/a"));
                    ui.end_row();
                });
        });
    }

    fn show_avatar(&mut self, ui: &mut egui::Ui, avatar: &Avatar) {
        if let Avatar::Image { url, .. } = avatar {
            match self.avatars.get(url) {
                Some(AvatarState::Ready(texture)) => {
                    ui.add(
                        egui::Image::new(texture)
                            .fit_to_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE))
                            .corner_radius(AVATAR_SIZE / 2.0),
                    );
                    return;
                }
                Some(AvatarState::Pending | AvatarState::Failed) => {}
                None => {
                    self.avatars.insert(url.clone(), AvatarState::Pending);
                    dispatch_backend_command(
                        &mut self.state,
                        &self.cmd_tx,
                        BackendCommand::FetchAvatar { url: url.clone() },
                    );
                }
            }
        }

        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(AVATAR_SIZE, AVATAR_SIZE),
            egui::Sense::hover(),
        );
        let painter = ui.painter();
        painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, AVATAR_FILL);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            avatar.initials(),
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
    }

    fn show_edit_window(&mut self, ctx: &egui::Context) {
        if self.state.edit_form().is_none() {
            return;
        }

        let mut keep_open = true;
        let mut save = false;
        egui::Window::new("Edit Employee")
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                if let Some(form) = self.state.edit_form_mut() {
                    form_fields(ui, "edit_form", form);
                }
                show_form_error(ui, self.edit_error.as_ref());
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    save = ui.button("Save Changes").clicked();
                });
            });

        if save {
            self.edit_error = self.run(Command::SubmitEdit).err();
        }
        if !keep_open {
            self.edit_error = None;
            let _ = self.run(Command::CloseEdit);
        }
    }

    fn show_delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.state.pending_delete().cloned() else {
            return;
        };

        let mut keep_open = true;
        let mut decision = None;
        egui::Window::new("Delete Employee")
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!(
                    "Are you sure you want to delete {}?",
                    pending.name
                ));
                ui.weak("This action cannot be undone.");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        decision = Some(Command::ConfirmDelete);
                    }
                    if ui.button("Cancel").clicked() {
                        decision = Some(Command::CancelDelete);
                    }
                });
            });

        if !keep_open {
            decision = Some(Command::CancelDelete);
        }
        if let Some(command) = decision {
            let _ = self.run(command);
        }
    }

    fn show_notifications(&self, ctx: &egui::Context) {
        if self.state.notifications().is_empty() {
            return;
        }

        let now = Instant::now();
        egui::Area::new(egui::Id::new("notifications"))
            .anchor(egui::Align2::RIGHT_TOP, [-20.0, 20.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for notification in self.state.notifications().iter() {
                    let opacity = 1.0 - notification.fade_progress(now);
                    let fill = match notification.kind {
                        NotificationKind::Success => SUCCESS_FILL,
                        NotificationKind::Error => ERROR_FILL,
                    };
                    egui::Frame::new()
                        .fill(fill.gamma_multiply(opacity))
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(16, 12))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&notification.message)
                                    .color(egui::Color32::WHITE.gamma_multiply(opacity))
                                    .strong(),
                            );
                        });
                    ui.add_space(8.0);
                }
            });
    }
}

fn form_fields(ui: &mut egui::Ui, id_salt: &str, form: &mut EmployeeForm) {
    egui::Grid::new(id_salt)
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Name *");
            ui.text_edit_singleline(&mut form.name);
            ui.end_row();
            ui.label("Email *");
            ui.text_edit_singleline(&mut form.email);
            ui.end_row();
            ui.label("Job title *");
            ui.text_edit_singleline(&mut form.job_title);
            ui.end_row();
            ui.label("Phone *");
            ui.text_edit_singleline(&mut form.phone);
            ui.end_row();
            ui.label("Image URL");
            ui.text_edit_singleline(&mut form.image_url);
            ui.end_row();
        });
}

fn show_form_error(ui: &mut egui::Ui, error: Option<&FormError>) {
    if let Some(error) = error {
        ui.colored_label(ERROR_FILL, error.to_string());
    }
}

impl eframe::App for EmployeeManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events(ctx);
        self.state.tick(Instant::now());

        self.show_header(ctx);
        self.show_create_panel(ctx);
        self.show_employee_list(ctx);
        self.show_edit_window(ctx);
        self.show_delete_confirmation(ctx);
        self.show_notifications(ctx);

        let now = Instant::now();
        let fading = self
            .state
            .notifications()
            .iter()
            .any(|n| n.phase() == NotificationPhase::Fading);
        let wake_in = match self.state.notifications().next_deadline() {
            _ if fading => FADE_FRAME,
            Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_REPAINT),
            None => IDLE_REPAINT,
        };
        ctx.request_repaint_after(wake_in);
    }
}
