pub struct TourStep {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const TOUR_STEPS: [TourStep; 10] = [
    TourStep { title: "Dashboard", description: "Panel de control centralizado", image: "assets/images/1.png" },
    TourStep { title: "Tablero Kanban", description: "Gestión visual de tareas y órdenes", image: "assets/images/2.1.png" },
    TourStep { title: "Inventarios", description: "Gestión de materiales en tiempo real", image: "assets/images/2.png" },
    TourStep { title: "Diseño", description: "Fichas técnicas y patrones", image: "assets/images/3.png" },
    TourStep { title: "Corte", description: "Órdenes y planificación", image: "assets/images/4.png" },
    TourStep { title: "Producción", description: "Control de piso y avances", image: "assets/images/5.png" },
    TourStep { title: "POS", description: "Ventas integradas", image: "assets/images/6.png" },
    TourStep { title: "Reportes", description: "Análisis y métricas", image: "assets/images/7.png" },
    TourStep { title: "Permisos", description: "Control de acceso", image: "assets/images/8.png" },
    TourStep { title: "Configuración", description: "Personalización completa", image: "assets/images/9.png" },
];

/// Position in the guided tour. Always a valid index into `TOUR_STEPS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TourState {
    current: usize,
}

impl TourState {
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step(&self) -> &'static TourStep {
        &TOUR_STEPS[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == TOUR_STEPS.len() - 1
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1).min(TOUR_STEPS.len() - 1);
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn go_to(&mut self, index: usize) {
        self.current = index.min(TOUR_STEPS.len() - 1);
    }

    /// Progress segments up to and including the current step are filled.
    pub fn is_reached(&self, index: usize) -> bool {
        index <= self.current
    }

    pub fn position_label(&self) -> String {
        format!("Paso {} de {}", self.current + 1, TOUR_STEPS.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard() {
        let tour = TourState::default();
        assert_eq!(tour.step().title, "Dashboard");
        assert!(tour.is_first());
        assert!(!tour.is_last());
        assert_eq!(tour.position_label(), "Paso 1 de 10");
    }

    #[test]
    fn stepping_clamps_at_both_ends() {
        let mut tour = TourState::default();
        tour.previous();
        assert_eq!(tour.current(), 0);

        for _ in 0..20 {
            tour.next();
        }
        assert!(tour.is_last());
        assert_eq!(tour.step().title, "Configuración");
        assert_eq!(tour.position_label(), "Paso 10 de 10");

        tour.previous();
        assert_eq!(tour.current(), 8);
    }

    #[test]
    fn jump_and_progress() {
        let mut tour = TourState::default();
        tour.go_to(3);
        assert_eq!(tour.step().title, "Diseño");
        assert!(tour.is_reached(0));
        assert!(tour.is_reached(3));
        assert!(!tour.is_reached(4));

        tour.go_to(42);
        assert!(tour.is_last());
    }
}
