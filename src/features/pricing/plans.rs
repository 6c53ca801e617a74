#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanId {
    Basic,
    #[default]
    Pro,
}

pub struct Plan {
    pub id: PlanId,
    pub name: &'static str,
    pub users: &'static str,
    pub summary: &'static str,
    pub popular: bool,
    /// Number of leading entries of `PLAN_FEATURES` the plan includes.
    pub included: usize,
}

pub const PLAN_FEATURES: [&str; 11] = [
    "Inventarios (insumos, materia prima)",
    "Kardex y reservas por orden",
    "Órdenes de producción",
    "Diseño: ficha técnica y ficha de corte",
    "Diseño: ruta y tabla de medidas",
    "Registros de producción por etapa",
    "Control de talleres y satélites",
    "Producto terminado y ventas",
    "Dashboards y alertas operativas",
    "Módulo de costos",
    "Soporte prioritario 24/7",
];

pub const PLANS: [Plan; 2] = [
    Plan {
        id: PlanId::Basic,
        name: "Plan Básico",
        users: "Hasta 5 usuarios",
        summary: "Estructura sólida para operaciones fundamentales y crecimiento inicial",
        popular: false,
        included: 4,
    },
    Plan {
        id: PlanId::Pro,
        name: "Plan Profesional",
        users: "Hasta 10 usuarios",
        summary: "Solución integral con todas las herramientas para máximo control",
        popular: true,
        included: PLAN_FEATURES.len(),
    },
];

impl PlanId {
    pub fn plan(self) -> &'static Plan {
        match self {
            PlanId::Basic => &PLANS[0],
            PlanId::Pro => &PLANS[1],
        }
    }
}

impl Plan {
    /// Every feature of the comparison grid paired with whether this plan has it.
    pub fn features(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        PLAN_FEATURES
            .iter()
            .enumerate()
            .map(move |(i, name)| (*name, i < self.included))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_is_the_popular_plan() {
        let plan = PlanId::default().plan();
        assert_eq!(plan.id, PlanId::Pro);
        assert!(plan.popular);
    }

    #[test]
    fn ids_resolve_to_their_plan() {
        for plan in PLANS.iter() {
            assert_eq!(plan.id.plan().name, plan.name);
        }
    }

    #[test]
    fn basic_plan_includes_first_four_features() {
        let included: Vec<&str> = PlanId::Basic
            .plan()
            .features()
            .filter(|(_, included)| *included)
            .map(|(name, _)| name)
            .collect();
        assert_eq!(included, PLAN_FEATURES[..4].to_vec());
        assert_eq!(PlanId::Basic.plan().features().count(), 11);
    }

    #[test]
    fn pro_plan_includes_everything() {
        assert!(PlanId::Pro.plan().features().all(|(_, included)| included));
    }
}
