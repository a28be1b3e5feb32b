//! Flow Scenario Tests
//!
//! Drives the flows against a scripted in-memory food service and applies
//! their results the way the dashboard view does.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use crate::{
        CancelToken, FoodDraft, FoodFlows, FoodId, FoodList, FoodPatch, FoodRecord, FoodService,
        ModalState, NewFood, Reconcile, ServiceError, ServiceResult,
    };

    /// In-memory stand-in for the REST backend
    #[derive(Default)]
    struct ScriptedService {
        foods: RefCell<Vec<FoodRecord>>,
        next_id: Cell<FoodId>,
        failing: Cell<bool>,
        requests: RefCell<Vec<String>>,
        created: RefCell<Vec<NewFood>>,
        /// Consumed one per update call, in call order
        update_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    }

    impl ScriptedService {
        fn with(foods: Vec<FoodRecord>) -> Rc<Self> {
            let next = foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
            let service = Self::default();
            *service.foods.borrow_mut() = foods;
            service.next_id.set(next);
            Rc::new(service)
        }

        fn fail(&self, failing: bool) {
            self.failing.set(failing);
        }

        fn gate_next_update(&self) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.update_gates.borrow_mut().push_back(rx);
            tx
        }

        fn check(&self, request: String) -> ServiceResult<()> {
            self.requests.borrow_mut().push(request);
            if self.failing.get() {
                return Err(ServiceError::Status { status: 500, body: "boom".to_string() });
            }
            Ok(())
        }
    }

    #[async_trait(?Send)]
    impl FoodService for ScriptedService {
        async fn list(&self) -> ServiceResult<Vec<FoodRecord>> {
            self.check("GET /foods".to_string())?;
            Ok(self.foods.borrow().clone())
        }

        async fn create(&self, food: &NewFood) -> ServiceResult<FoodRecord> {
            self.check("POST /foods".to_string())?;
            self.created.borrow_mut().push(food.clone());
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let record = FoodRecord {
                id,
                name: food.name.clone(),
                image: food.image.clone(),
                price: food.price.clone(),
                description: food.description.clone(),
                available: food.available,
            };
            self.foods.borrow_mut().push(record.clone());
            Ok(record)
        }

        async fn update(&self, food: &FoodRecord) -> ServiceResult<FoodRecord> {
            let gate = self.update_gates.borrow_mut().pop_front();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.check(format!("PUT /foods/{}", food.id))?;
            let mut foods = self.foods.borrow_mut();
            match foods.iter_mut().find(|f| f.id == food.id) {
                Some(stored) => {
                    *stored = food.clone();
                    Ok(food.clone())
                }
                None => Err(ServiceError::Status { status: 404, body: String::new() }),
            }
        }

        async fn delete(&self, id: FoodId) -> ServiceResult<()> {
            self.check(format!("DELETE /foods/{}", id))?;
            self.foods.borrow_mut().retain(|f| f.id != id);
            Ok(())
        }
    }

    /// What the dashboard holds
    #[derive(Default)]
    struct View {
        foods: FoodList,
        modal: ModalState,
        token: CancelToken,
    }

    fn food(id: FoodId, name: &str) -> FoodRecord {
        FoodRecord {
            id,
            name: name.to_string(),
            image: "https://img/a.png".to_string(),
            price: "12.50".to_string(),
            description: "house special".to_string(),
            available: true,
        }
    }

    fn draft_b() -> FoodDraft {
        FoodDraft {
            image: "u".to_string(),
            name: "B".to_string(),
            price: "9.90".to_string(),
            description: "d".to_string(),
        }
    }

    fn names(foods: &FoodList) -> Vec<String> {
        foods.iter().map(|f| f.name.clone()).collect()
    }

    async fn loaded_view(flows: &FoodFlows<Rc<ScriptedService>>) -> View {
        let mut view = View::default();
        let mutation = flows.load().await;
        view.foods.apply(mutation);
        view
    }

    /// Submit from the open add modal the way ModalAddFood does
    async fn submit_add(view: &mut View, flows: &FoodFlows<Rc<ScriptedService>>, draft: FoodDraft) {
        let ticket = view.modal.ticket().expect("add modal open");
        view.modal.after_submit(ticket, flows.policy());
        let settled = flows.add(draft).await;
        let mutation = settled.settle(ticket, flows.policy(), &mut view.modal);
        view.foods.apply(mutation);
    }

    #[tokio::test]
    async fn test_initial_load_renders_one_item() {
        let service = ScriptedService::with(vec![food(1, "A")]);
        let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Optimistic);

        let view = loaded_view(&flows).await;

        assert_eq!(names(&view.foods), vec!["A"]);
        assert_eq!(*service.requests.borrow(), vec!["GET /foods"]);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_list_empty() {
        let service = ScriptedService::with(vec![food(1, "A")]);
        service.fail(true);
        let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Optimistic);

        assert!(flows.load().await.is_nothing());
        let view = loaded_view(&flows).await;
        assert!(view.foods.is_empty());
    }

    #[tokio::test]
    async fn test_add_appends_server_record_and_closes_modal() {
        let service = ScriptedService::with(vec![food(1, "A")]);
        let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Optimistic);
        let mut view = loaded_view(&flows).await;
        view.modal.open_add();

        submit_add(&mut view, &flows, draft_b()).await;

        assert_eq!(names(&view.foods), vec!["A", "B"]);
        let added = view.foods.get(2).expect("server-assigned id 2");
        assert!(added.available);
        assert_eq!(added.price, "9.90");
        assert!(!view.modal.is_open());
        // available is forced on the wire
        assert!(service.created.borrow()[0].available);
    }

    #[tokio::test]
    async fn test_failed_add_still_closes_modal() {
        let service = ScriptedService::with(vec![food(1, "A")]);
        let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Optimistic);
        let mut view = loaded_view(&flows).await;
        view.modal.open_add();
        service.fail(true);

        submit_add(&mut view, &flows, draft_b()).await;

        assert!(!view.modal.is_open());
        assert_eq!(names(&view.foods), vec!["A"]);
    }

    #[tokio::test]
    async fn test_confirmed_failed_add_keeps_modal_open() {
        let service = ScriptedService::with(vec![food(1, "A")]);
        let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Confirmed);
        let mut view = loaded_view(&flows).await;
        view.modal.open_add();
        service.fail(true);

        submit_add(&mut view, &flows, draft_b()).await;
        assert!(view.modal.is_add_open());
        assert_eq!(view.foods.len(), 1);

        service.fail(false);
        submit_add(&mut view, &flows, draft_b()).await;
        assert!(!view.modal.is_open());
        assert_eq!(names(&view.foods), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_edit_replaces_selected_record() {
        let service = ScriptedService::with(vec![food(1, "A"), food(2, "B")]);
        let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Optimistic);
        let mut view = loaded_view(&flows).await;

        let selected = view.foods.get(1).cloned().expect("record 1");
        view.modal.select_for_edit(selected);
        // Selecting makes no request
        assert_eq!(service.requests.borrow().len(), 1);

        let selected = view.modal.editing().cloned().expect("edit modal open");
        let ticket = view.modal.ticket().expect("edit modal open");
        view.modal.after_submit(ticket, flows.policy());
        let patch = FoodPatch { name: Some("A2".to_string()), ..Default::default() };
        let settled = flows.update(&selected, patch).await;
        assert!(settled.ok);
        let mutation = settled.settle(ticket, flows.policy(), &mut view.modal);
        view.foods.apply(mutation);

        assert_eq!(names(&view.foods), vec!["A2", "B"]);
        let edited = view.foods.get(1).expect("record 1");
        assert_eq!(edited.price, "12.50");
        assert_eq!(edited.description, "house special");
        assert_eq!(service.requests.borrow().last().map(String::as_str), Some("PUT /foods/1"));
        assert!(!view.modal.is_open());
    }

    #[tokio::test]
    async fn test_confirmed_edit_result_keeps_newer_selection_open() {
        let service = ScriptedService::with(vec![food(1, "A"), food(2, "B")]);
        let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Confirmed);
        let mut view = loaded_view(&flows).await;

        view.modal.select_for_edit(food(1, "A"));
        let ticket = view.modal.ticket().expect("edit modal open");
        view.modal.after_submit(ticket, flows.policy());
        let patch = FoodPatch { name: Some("A2".to_string()), ..Default::default() };
        let settled = flows.update(&food(1, "A"), patch).await;

        // Meanwhile the user closed the form and picked another dish
        view.modal.close();
        view.modal.select_for_edit(food(2, "B"));
        let mutation = settled.settle(ticket, flows.policy(), &mut view.modal);
        view.foods.apply(mutation);

        assert_eq!(view.modal.editing().map(|f| f.id), Some(2));
        assert_eq!(names(&view.foods), vec!["A2", "B"]);
    }

    #[tokio::test]
    async fn test_failed_edit_leaves_state_unchanged() {
        let service = ScriptedService::with(vec![food(1, "A")]);
        let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Optimistic);
        let mut view = loaded_view(&flows).await;
        let before = view.foods.clone();
        service.fail(true);

        let patch = FoodPatch { name: Some("A2".to_string()), ..Default::default() };
        let settled = flows.update(&food(1, "A"), patch).await;
        assert!(!settled.ok);
        view.foods.apply(settled.mutation);

        assert_eq!(view.foods, before);
    }

    #[tokio::test]
    async fn test_delete_removes_regardless_of_outcome() {
        for failing in [false, true] {
            let service = ScriptedService::with(vec![food(1, "A"), food(2, "B")]);
            let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Optimistic);
            let mut view = loaded_view(&flows).await;
            service.fail(failing);

            let settled = flows.delete(1).await;
            assert_eq!(settled.ok, !failing);
            view.foods.apply(settled.mutation);

            assert!(!view.foods.contains(1), "failing={}", failing);
            assert_eq!(names(&view.foods), vec!["B"]);
        }
    }

    #[tokio::test]
    async fn test_confirmed_delete_keeps_record_on_failure() {
        let service = ScriptedService::with(vec![food(1, "A")]);
        let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Confirmed);
        let mut view = loaded_view(&flows).await;
        service.fail(true);

        view.foods.apply(flows.delete(1).await.mutation);

        assert!(view.foods.contains(1));
    }

    #[tokio::test]
    async fn test_concurrent_edits_apply_in_completion_order() {
        let service = ScriptedService::with(vec![food(1, "A"), food(2, "B")]);
        let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Optimistic);
        let view = RefCell::new(loaded_view(&flows).await);
        let completed = RefCell::new(Vec::new());
        let release_first = service.gate_next_update();

        let slow = async {
            let patch = FoodPatch { name: Some("A2".to_string()), ..Default::default() };
            let settled = flows.update(&food(1, "A"), patch).await;
            view.borrow_mut().foods.apply(settled.mutation);
            completed.borrow_mut().push(1);
        };
        let fast = async {
            let patch = FoodPatch { name: Some("B2".to_string()), ..Default::default() };
            let settled = flows.update(&food(2, "B"), patch).await;
            view.borrow_mut().foods.apply(settled.mutation);
            completed.borrow_mut().push(2);
            let _ = release_first.send(());
        };
        tokio::join!(slow, fast);

        assert_eq!(*completed.borrow(), vec![2, 1]);
        assert_eq!(names(&view.borrow().foods), vec!["A2", "B2"]);
    }

    #[tokio::test]
    async fn test_same_record_edited_twice_last_response_wins() {
        let service = ScriptedService::with(vec![food(1, "A")]);
        let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Optimistic);
        let view = RefCell::new(loaded_view(&flows).await);
        let release_first = service.gate_next_update();

        let first = async {
            let patch = FoodPatch { name: Some("first".to_string()), ..Default::default() };
            let settled = flows.update(&food(1, "A"), patch).await;
            view.borrow_mut().foods.apply(settled.mutation);
        };
        let second = async {
            let patch = FoodPatch { name: Some("second".to_string()), ..Default::default() };
            let settled = flows.update(&food(1, "A"), patch).await;
            view.borrow_mut().foods.apply(settled.mutation);
            let _ = release_first.send(());
        };
        tokio::join!(first, second);

        assert_eq!(names(&view.borrow().foods), vec!["first"]);
        assert_eq!(view.borrow().foods.len(), 1);
    }

    #[tokio::test]
    async fn test_late_result_dropped_after_teardown() {
        let service = ScriptedService::with(vec![food(1, "A")]);
        let flows = FoodFlows::new(Rc::clone(&service), Reconcile::Optimistic);
        let mut view = loaded_view(&flows).await;

        let settled = flows.add(draft_b()).await;
        view.token.cancel();
        let View { foods, token, .. } = &mut view;
        let applied = token.run_unless_cancelled(|| foods.apply(settled.mutation));

        assert!(!applied);
        assert_eq!(names(&view.foods), vec!["A"]);
        // The request itself still went out
        assert_eq!(service.foods.borrow().len(), 2);
    }
}
