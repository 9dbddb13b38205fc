use leptos::*;

use crate::api::ApiClient;
use crate::pages::dashboard::repository::DashboardRepository;
use crate::state::dashboard::DashboardViewState;
use crate::state::toast::{use_toaster, Toaster};
use crate::state::transition;

pub async fn load(
    repository: &DashboardRepository,
    state: RwSignal<DashboardViewState>,
    toaster: Toaster,
) {
    let Some(ticket) = transition(state, DashboardViewState::begin_load) else {
        return;
    };
    let result = repository.load().await;
    if let Some(Some(notification)) = transition(state, |s| s.finish_load(ticket, result)) {
        toaster.push(notification);
    }
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub state: RwSignal<DashboardViewState>,
    repository: StoredValue<DashboardRepository>,
    toaster: Toaster,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let vm = Self {
            state: create_rw_signal(DashboardViewState::default()),
            repository: store_value(DashboardRepository::new(api)),
            toaster: use_toaster(),
        };
        create_effect(move |_| vm.reload());
        vm
    }

    pub fn reload(&self) {
        let repository = self.repository.get_value();
        let (state, toaster) = (self.state, self.toaster);
        spawn_local(async move { load(&repository, state, toaster).await });
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
