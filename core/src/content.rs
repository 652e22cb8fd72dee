//! Static site content
//!
//! Everything here is a literal with no identity. Views render it as is.

/// Category of a schedule entry, drives the timeline dot style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Start,
    Key,
    Normal,
    Alert,
    End,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Start => "start",
            EntryKind::Key => "key",
            EntryKind::Normal => "normal",
            EntryKind::Alert => "alert",
            EntryKind::End => "end",
        }
    }

    /// Timeline dot variant: key moments glow, deadlines are red, the rest
    /// share the neutral dot.
    pub fn dot(&self) -> &'static str {
        match self {
            EntryKind::Key => "key",
            EntryKind::Alert => "alert",
            EntryKind::Start | EntryKind::Normal | EntryKind::End => "neutral",
        }
    }
}

/// A row of the event timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: EntryKind,
}

pub static SCHEDULE: [ScheduleEntry; 6] = [
    ScheduleEntry {
        time: "Viernes 17:00",
        title: "Check-in & Bienvenida",
        description: "Registro de participantes y entrega de swags.",
        kind: EntryKind::Start,
    },
    ScheduleEntry {
        time: "Viernes 18:00",
        title: "Keynote & Tema",
        description: "Revelación del tema oficial de la GGJ 2025.",
        kind: EntryKind::Key,
    },
    ScheduleEntry {
        time: "Viernes 19:00",
        title: "Formación de Equipos",
        description: "Dinámicas para encontrar equipo.",
        kind: EntryKind::Normal,
    },
    ScheduleEntry {
        time: "Sábado 12:00",
        title: "Mentoria Ronda 1",
        description: "Feedback de expertos sobre prototipos.",
        kind: EntryKind::Normal,
    },
    ScheduleEntry {
        time: "Domingo 15:00",
        title: "Subida de Juegos",
        description: "Deadline para subir ejecutables.",
        kind: EntryKind::Alert,
    },
    ScheduleEntry {
        time: "Domingo 17:00",
        title: "Showcase & Demos",
        description: "Presentación final de proyectos.",
        kind: EntryKind::End,
    },
];

/// Mentor or jury member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mentor {
    pub name: &'static str,
    pub role: &'static str,
    pub affiliation: &'static str,
}

impl Mentor {
    /// Avatar placeholder: the first character of the name
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

pub static MENTORS: [Mentor; 4] = [
    Mentor {
        name: "Andrea P.",
        role: "Game Designer",
        affiliation: "Ubisoft",
    },
    Mentor {
        name: "Carlos M.",
        role: "Unity Dev",
        affiliation: "Indie",
    },
    Mentor {
        name: "Lucia R.",
        role: "3D Artist",
        affiliation: "Freelance",
    },
    Mentor {
        name: "David T.",
        role: "Sound Engineer",
        affiliation: "Berklee",
    },
];

/// Value proposition card on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub title: &'static str,
    pub body: &'static str,
}

pub static PILLARS: [Pillar; 3] = [
    Pillar {
        title: "Creatividad",
        body: "Libera tu imaginación. No importa tu nivel de experiencia, lo importante es atreverse a crear algo único desde cero.",
    },
    Pillar {
        title: "Comunidad",
        body: "Conecta con programadores, artistas, músicos y diseñadores de Cochabamba. Haz networking y forma tu dream team.",
    },
    Pillar {
        title: "Aprendizaje",
        body: "Aprende nuevas herramientas, mejora tus habilidades de trabajo en equipo y recibe feedback de mentores expertos.",
    },
];

/// Venue details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Venue {
    pub name: &'static str,
    pub address: &'static str,
    pub amenities: &'static [&'static str],
}

pub static VENUE: Venue = Venue {
    name: "Universidad Católica Boliviana (UCB)",
    address: "Calle M. Marquez, Cochabamba",
    amenities: &[
        "Labs de Computación Alta Gama",
        "Área de descanso 24/7",
        "Cafetería con snacks gratuitos",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_order() {
        let titles: Vec<&str> = SCHEDULE.iter().map(|e| e.title).collect();
        assert_eq!(titles.first(), Some(&"Check-in & Bienvenida"));
        assert_eq!(titles.last(), Some(&"Showcase & Demos"));
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn test_dot_variants() {
        assert_eq!(EntryKind::Key.dot(), "key");
        assert_eq!(EntryKind::Alert.dot(), "alert");
        assert_eq!(EntryKind::Start.dot(), "neutral");
        assert_eq!(EntryKind::End.dot(), "neutral");
    }

    #[test]
    fn test_mentor_initials() {
        let initials: Vec<String> = MENTORS.iter().map(Mentor::initial).collect();
        assert_eq!(initials, vec!["A", "C", "L", "D"]);
    }

    #[test]
    fn test_initial_of_multibyte_name() {
        let mentor = Mentor {
            name: "Ñusta Q.",
            role: "Producer",
            affiliation: "Indie",
        };
        assert_eq!(mentor.initial(), "Ñ");

        let nameless = Mentor {
            name: "",
            role: "",
            affiliation: "",
        };
        assert_eq!(nameless.initial(), "");
    }
}
