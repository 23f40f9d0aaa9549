use crate::logic::care::PlantCareRoutine;
use crate::models::{Plant, PlantCareStaff, SalesStaff, StaffMember};
use chrono::{DateTime, Utc};

/// Mutable state a staff command works against.
pub struct TaskContext<'a> {
    pub plants: &'a mut [Plant],
    pub customers_assisted: u32,
}

impl<'a> TaskContext<'a> {
    pub fn new(plants: &'a mut [Plant]) -> Self {
        Self {
            plants,
            customers_assisted: 0,
        }
    }
}

pub trait StaffCommand: Send {
    fn name(&self) -> &'static str;
    fn staff_name(&self) -> &str;
    fn execute(&self, ctx: &mut TaskContext<'_>) -> Vec<String>;
}

#[derive(Debug, Clone)]
pub struct TaskOutcome {
    pub task: String,
    pub staff: String,
    pub log: Vec<String>,
    pub executed_at: DateTime<Utc>,
}

pub struct WaterPlantsCommand {
    receiver: PlantCareStaff,
}

impl WaterPlantsCommand {
    pub fn new(receiver: PlantCareStaff) -> Self {
        Self { receiver }
    }
}

impl StaffCommand for WaterPlantsCommand {
    fn name(&self) -> &'static str {
        "Water plants"
    }

    fn staff_name(&self) -> &str {
        self.receiver.name()
    }

    fn execute(&self, ctx: &mut TaskContext<'_>) -> Vec<String> {
        ctx.plants
            .iter_mut()
            .map(|plant| self.receiver.water_plant(plant))
            .collect()
    }
}

pub struct PrunePlantsCommand {
    receiver: PlantCareStaff,
}

impl PrunePlantsCommand {
    pub fn new(receiver: PlantCareStaff) -> Self {
        Self { receiver }
    }
}

impl StaffCommand for PrunePlantsCommand {
    fn name(&self) -> &'static str {
        "Prune plants"
    }

    fn staff_name(&self) -> &str {
        self.receiver.name()
    }

    fn execute(&self, ctx: &mut TaskContext<'_>) -> Vec<String> {
        let log: Vec<String> = ctx
            .plants
            .iter_mut()
            .filter(|plant| plant.needs_pruning())
            .map(|plant| self.receiver.prune_plant(plant))
            .collect();
        if log.is_empty() {
            return vec![format!("{} found nothing to prune", self.receiver.name())];
        }
        log
    }
}

pub struct FertilizePlantsCommand {
    receiver: PlantCareStaff,
}

impl FertilizePlantsCommand {
    pub fn new(receiver: PlantCareStaff) -> Self {
        Self { receiver }
    }
}

impl StaffCommand for FertilizePlantsCommand {
    fn name(&self) -> &'static str {
        "Fertilize plants"
    }

    fn staff_name(&self) -> &str {
        self.receiver.name()
    }

    fn execute(&self, ctx: &mut TaskContext<'_>) -> Vec<String> {
        ctx.plants
            .iter_mut()
            .map(|plant| self.receiver.fertilize_plant(plant))
            .collect()
    }
}

pub struct AssistCustomerCommand {
    receiver: SalesStaff,
}

impl AssistCustomerCommand {
    pub fn new(receiver: SalesStaff) -> Self {
        Self { receiver }
    }
}

impl StaffCommand for AssistCustomerCommand {
    fn name(&self) -> &'static str {
        "Assist customer"
    }

    fn staff_name(&self) -> &str {
        self.receiver.name()
    }

    fn execute(&self, ctx: &mut TaskContext<'_>) -> Vec<String> {
        ctx.customers_assisted += 1;
        vec![self.receiver.assist_customer()]
    }
}

/// Queues staff commands and runs them as a batch.
#[derive(Default)]
pub struct TaskScheduler {
    queue: Vec<Box<dyn StaffCommand>>,
    history: Vec<TaskOutcome>,
    routine: Option<Box<dyn PlantCareRoutine>>,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: Box<dyn StaffCommand>) {
        tracing::debug!(task = command.name(), staff = command.staff_name(), "Task queued");
        self.queue.push(command);
    }

    pub fn command_count(&self) -> usize {
        self.queue.len()
    }

    pub fn pending(&self) -> Vec<(&'static str, &str)> {
        self.queue.iter().map(|c| (c.name(), c.staff_name())).collect()
    }

    pub fn clear_commands(&mut self) {
        tracing::debug!(dropped = self.queue.len(), "Task queue cleared");
        self.queue.clear();
    }

    /// Care routine applied to every plant before each batch runs.
    pub fn set_routine(&mut self, routine: Option<Box<dyn PlantCareRoutine>>) {
        self.routine = routine;
    }

    pub fn history(&self) -> &[TaskOutcome] {
        &self.history
    }

    pub fn execute_command(
        &mut self,
        command: &dyn StaffCommand,
        ctx: &mut TaskContext<'_>,
    ) -> TaskOutcome {
        let outcome = TaskOutcome {
            task: command.name().to_string(),
            staff: command.staff_name().to_string(),
            log: command.execute(ctx),
            executed_at: Utc::now(),
        };
        tracing::info!(task = %outcome.task, staff = %outcome.staff, "Task executed");
        self.history.push(outcome.clone());
        outcome
    }

    pub fn execute_commands(&mut self, ctx: &mut TaskContext<'_>) -> Vec<TaskOutcome> {
        let mut outcomes = Vec::new();

        if let Some(routine) = &self.routine {
            let log = ctx
                .plants
                .iter_mut()
                .flat_map(|plant| routine.care_for_plant(plant))
                .collect();
            let outcome = TaskOutcome {
                task: routine.name().to_string(),
                staff: "Scheduler".to_string(),
                log,
                executed_at: Utc::now(),
            };
            self.history.push(outcome.clone());
            outcomes.push(outcome);
        }

        let queue = std::mem::take(&mut self.queue);
        for command in queue {
            outcomes.push(self.execute_command(command.as_ref(), ctx));
        }
        outcomes
    }
}
