mod state;

use contracts::domain::a002_employee::{AssignRoleDto, PendingEmployee};
use contracts::domain::a003_role::{assignable_roles, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_employee::api;
use crate::domain::a003_role::api as role_api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::error::UiError;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, paginate, Searchable, SearchInput, MISSING_LABEL};
use crate::shared::mutation::ConfirmState;
use crate::shared::notify::use_notifications;
use crate::system::auth::guard::RequireAuth;
use crate::system::auth::use_session;
use crate::system::auth::Session;
use state::create_state;

impl Searchable for PendingEmployee {
    fn search_projections(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.email.clone().unwrap_or_else(|| MISSING_LABEL.to_string()),
            self.branch
                .as_ref()
                .map(|b| b.name.clone())
                .unwrap_or_else(|| MISSING_LABEL.to_string()),
            self.department
                .as_ref()
                .map(|d| d.name.clone())
                .unwrap_or_else(|| MISSING_LABEL.to_string()),
            self.role_name
                .clone()
                .unwrap_or_else(|| MISSING_LABEL.to_string()),
            format_date(&self.created_on),
        ]
    }
}

/// Запрошенное назначение роли, ждёт подтверждения в модальном окне.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RoleAssignment {
    employee_id: i64,
    employee_name: String,
    role_name: String,
}

/// Зависимая цепочка: сперва код роли действующего пользователя, затем
/// справочник ролей. Второй запрос не стартует, пока не завершился первый.
async fn load_assignable(session: &Session) -> Result<Vec<Role>, UiError> {
    let account = api::fetch_account(session, session.user.id).await?;
    let Some(code) = account.role_code else {
        return Err(UiError::validation(
            "У текущего пользователя не задан код роли",
        ));
    };
    let roles = role_api::fetch_active_roles(session).await?;
    Ok(assignable_roles(&roles, &code))
}

#[component]
pub fn PendingEmployeesListPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <PendingEmployeesList />
        </RequireAuth>
    }
}

#[component]
fn PendingEmployeesList() -> impl IntoView {
    let state = create_state();
    let all_employees: RwSignal<Vec<PendingEmployee>> = RwSignal::new(Vec::new());
    let roles: RwSignal<Vec<Role>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (roles_loaded, set_roles_loaded) = signal(false);
    let confirm: RwSignal<ConfirmState<RoleAssignment>> = RwSignal::new(ConfirmState::Idle);

    let (session, _) = use_session();
    let notify = use_notifications();

    let load_employees = move || {
        let Some(session) = session.get_untracked() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_pending(&session).await {
                Ok(data) => {
                    all_employees.set(data);
                    state.update(|s| {
                        s.page = 1;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    notify.error(format!("Не удалось загрузить сотрудников: {}", e));
                }
            }
            set_loading.set(false);
        });
    };

    let load_roles = move || {
        let Some(session) = session.get_untracked() else {
            return;
        };
        set_roles_loaded.set(false);
        spawn_local(async move {
            match load_assignable(&session).await {
                Ok(list) => {
                    if list.is_empty() {
                        notify.info("Нет ролей, доступных вам для назначения");
                    }
                    roles.set(list);
                }
                Err(e) => {
                    notify.error(format!("Не удалось загрузить список ролей: {}", e));
                }
            }
            set_roles_loaded.set(true);
        });
    };

    // Две независимые загрузки, порядок завершения не важен
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_employees();
            load_roles();
        }
    });

    let view_signal = Signal::derive(move || {
        let (query, page, page_size) =
            state.with(|s| (s.search_query.clone(), s.page, s.page_size));
        let data = filter_list(&all_employees.get(), &query);
        paginate(data, page_size, page)
    });

    let apply_search = move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 1;
        });
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
    };

    let request_assignment = move |assignment: RoleAssignment| {
        confirm.update(|s| s.request(assignment));
    };

    let confirm_assignment = move |_| {
        let Some(assignment) = confirm.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        let Some(session) = session.get_untracked() else {
            confirm.update(|s| s.finish());
            return;
        };
        spawn_local(async move {
            let known = all_employees
                .get_untracked()
                .iter()
                .any(|e| e.id == assignment.employee_id);
            if !known {
                notify.error(UiError::NotFound(assignment.employee_id).to_string());
            } else {
                let dto = AssignRoleDto {
                    role_name: assignment.role_name.clone(),
                };
                match api::assign_role(&session, assignment.employee_id, dto).await {
                    Ok(updated) => {
                        all_employees.update(|list| {
                            if let Some(slot) = list.iter_mut().find(|e| e.id == updated.id) {
                                *slot = updated;
                            }
                        });
                        // После закрытия уведомления список перечитывается:
                        // назначенный сотрудник уходит из «ожидающих»
                        notify.show_with_on_dismiss(
                            format!(
                                "Сотруднику «{}» назначена роль «{}»",
                                assignment.employee_name, assignment.role_name
                            ),
                            crate::shared::notify::NotificationKind::Success,
                            Callback::new(move |_| load_employees()),
                        );
                    }
                    Err(e) => {
                        notify.error(e.to_string());
                    }
                }
            }
            confirm.update(|s| s.finish());
        });
    };

    let cancel_assignment = move |_| {
        confirm.update(|s| s.cancel());
    };

    let confirm_message = Signal::derive(move || {
        confirm
            .get()
            .action()
            .map(|a| {
                format!(
                    "Назначить сотруднику «{}» роль «{}»?",
                    a.employee_name, a.role_name
                )
            })
            .unwrap_or_default()
    });

    view! {
        <div class="page" id="a002_employee--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Сотрудники: назначение ролей"</h1>
                    <Badge>{move || view_signal.get().total_items.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            load_employees();
                            load_roles();
                        }
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Поиск"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || view_signal.get().current_page)
                                total_pages=Signal::derive(move || view_signal.get().total_pages)
                                total_items=Signal::derive(move || view_signal.get().total_items)
                                page_size=Signal::derive(move || state.get().page_size)
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                            />
                        </div>
                        <div class="filter-panel-header__right">
                            <SearchInput
                                on_change=Callback::new(apply_search)
                                placeholder="ФИО, email, филиал или отдел..."
                            />
                        </div>
                    </div>
                </div>

                {move || {
                    if loading.get() {
                        view! { <div class="loading-placeholder">"Загрузка данных..."</div> }
                            .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"ФИО"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Филиал"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Отдел"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Текущая роль"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Создан"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Назначение"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || view_signal.get().rows
                                key=|e| (e.id, e.role_name.clone())
                                children=move |employee| {
                                    view! {
                                        <EmployeeRow
                                            employee=employee
                                            roles=roles
                                            roles_loaded=roles_loaded
                                            on_assign=Callback::new(request_assignment)
                                        />
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || {
                    if confirm.get().is_open() {
                        view! {
                            <ConfirmDialog
                                title="Назначение роли"
                                message=confirm_message
                                busy=Signal::derive(move || confirm.get().is_submitting())
                                on_confirm=Callback::new(confirm_assignment)
                                on_cancel=Callback::new(cancel_assignment)
                                confirm_label="Назначить".to_string()
                            />
                        }
                            .into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn EmployeeRow(
    employee: PendingEmployee,
    roles: RwSignal<Vec<Role>>,
    #[prop(into)] roles_loaded: Signal<bool>,
    on_assign: Callback<RoleAssignment>,
) -> impl IntoView {
    let selected_role = RwSignal::new(String::new());

    let employee_id = employee.id;
    let employee_name = employee.full_name.clone();
    let email = employee
        .email
        .clone()
        .unwrap_or_else(|| MISSING_LABEL.to_string());
    let branch = employee
        .branch
        .as_ref()
        .map(|b| b.name.clone())
        .unwrap_or_else(|| MISSING_LABEL.to_string());
    let department = employee
        .department
        .as_ref()
        .map(|d| d.name.clone())
        .unwrap_or_else(|| MISSING_LABEL.to_string());
    let current_role = employee
        .role_name
        .clone()
        .unwrap_or_else(|| MISSING_LABEL.to_string());
    let created = format_date(&employee.created_on);

    let assign_disabled =
        Signal::derive(move || !roles_loaded.get() || selected_role.get().is_empty());

    let request = {
        let employee_name = employee_name.clone();
        move |_| {
            let role_name = selected_role.get_untracked();
            if role_name.is_empty() {
                return;
            }
            on_assign.run(RoleAssignment {
                employee_id,
                employee_name: employee_name.clone(),
                role_name,
            });
        }
    };

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>
                    <span style="font-weight: 500;">{employee.full_name.clone()}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{email}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{branch}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{department}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{current_role}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{created}</TableCellLayout>
            </TableCell>
            <TableCell>
                <select
                    class="role-select"
                    on:change=move |ev| selected_role.set(event_target_value(&ev))
                    prop:value=move || selected_role.get()
                >
                    <option value="">"— роль —"</option>
                    {move || {
                        roles
                            .get()
                            .into_iter()
                            .map(|role| {
                                view! {
                                    <option value=role
                                        .role_name
                                        .clone()>{role.role_name.clone()}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    on_click=request
                    disabled=assign_disabled
                >
                    {icon("user-check")}
                    " Назначить"
                </Button>
            </TableCell>
        </TableRow>
    }
}
