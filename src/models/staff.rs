use crate::models::Plant;

pub trait StaffMember {
    fn name(&self) -> &str;
    fn role(&self) -> &'static str;
    fn perform_duties(&self, plants: &mut [Plant]) -> Vec<String>;
}

#[derive(Debug, Clone)]
pub struct PlantCareStaff {
    name: String,
}

impl PlantCareStaff {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn water_plant(&self, plant: &mut Plant) -> String {
        plant.water();
        format!("{} watered {}", self.name, plant.label())
    }

    pub fn fertilize_plant(&self, plant: &mut Plant) -> String {
        plant.fertilize();
        format!("{} fertilized {}", self.name, plant.label())
    }

    pub fn prune_plant(&self, plant: &mut Plant) -> String {
        plant.prune();
        format!("{} pruned {}", self.name, plant.label())
    }
}

impl StaffMember for PlantCareStaff {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> &'static str {
        "Plant Care"
    }

    fn perform_duties(&self, plants: &mut [Plant]) -> Vec<String> {
        let mut log = Vec::new();
        for plant in plants.iter_mut() {
            log.push(self.water_plant(plant));
            log.push(self.fertilize_plant(plant));
            if plant.needs_pruning() {
                log.push(self.prune_plant(plant));
            }
        }
        log
    }
}

#[derive(Debug, Clone)]
pub struct SalesStaff {
    name: String,
}

impl SalesStaff {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn assist_customer(&self) -> String {
        format!("{} is assisting a customer", self.name)
    }
}

impl StaffMember for SalesStaff {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> &'static str {
        "Sales"
    }

    fn perform_duties(&self, _plants: &mut [Plant]) -> Vec<String> {
        vec![self.assist_customer()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    #[test]
    fn roles() {
        assert_eq!(PlantCareStaff::new("Thandi").role(), "Plant Care");
        assert_eq!(SalesStaff::new("Sipho").role(), "Sales");
    }

    #[test]
    fn plant_care_duties_cover_every_plant() {
        let staff = PlantCareStaff::new("Thandi");
        let mut plants = vec![Plant::new(1, Species::Rose), Plant::new(2, Species::Baobab)];
        plants[1].height_cm = 60.0;

        let log = staff.perform_duties(&mut plants);
        // water + fertilize for both, prune only the tall baobab
        assert_eq!(log.len(), 5);
        assert_eq!(log[0], "Thandi watered Rose #1");
        assert_eq!(plants[0].times_watered, 1);
        assert_eq!(plants[0].times_fertilized, 1);
        assert_eq!(plants[0].times_pruned, 0);
        assert_eq!(plants[1].times_pruned, 1);
    }

    #[test]
    fn sales_staff_assists() {
        let staff = SalesStaff::new("Sipho");
        let log = staff.perform_duties(&mut []);
        assert_eq!(log, vec!["Sipho is assisting a customer".to_string()]);
    }
}
