//! Static copy shown on the site.

use crate::navigation::ServiceKind;

pub struct Service {
    pub kind: ServiceKind,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub benefits: &'static [&'static str],
}

pub static SERVICES: [Service; 3] = [
    Service {
        kind: ServiceKind::Mobile,
        title: "Aplicaciones Móviles",
        description: "Diseñamos y desarrollamos aplicaciones móviles a la medida de tu negocio, \
                      rápidas, seguras y fáciles de usar para tus clientes.",
        icon: "📱",
        accent: "accent-blue",
        benefits: &[
            "Presencia directa en el teléfono de tus clientes",
            "Pedidos, reservas y pagos desde la aplicación",
            "Notificaciones para promociones y recordatorios",
            "Diseño adaptado a la identidad de tu marca",
            "Publicación en tiendas de aplicaciones",
            "Soporte y actualizaciones continuas",
        ],
    },
    Service {
        kind: ServiceKind::Web,
        title: "Páginas Web",
        description: "Creamos sitios web modernos y optimizados que muestran lo mejor de tu \
                      negocio y convierten visitas en clientes.",
        icon: "🌐",
        accent: "accent-violet",
        benefits: &[
            "Sitio disponible las 24 horas del día",
            "Diseño adaptable a computadoras y teléfonos",
            "Optimización para buscadores (SEO)",
            "Formularios de contacto conectados a WhatsApp",
            "Catálogos de productos y servicios",
            "Dominio y hospedaje configurados",
        ],
    },
    Service {
        kind: ServiceKind::Social,
        title: "Gestión de Redes Sociales",
        description: "Administramos tus redes sociales con contenido visual de calidad para \
                      aumentar el alcance y la confianza en tu marca.",
        icon: "📣",
        accent: "accent-cyan",
        benefits: &[
            "Calendario de publicaciones planificado",
            "Diseño gráfico y edición de video",
            "Campañas de publicidad segmentadas",
            "Atención de mensajes y comentarios",
            "Reportes mensuales de resultados",
            "Crecimiento orgánico de seguidores",
        ],
    },
];

pub fn service(kind: ServiceKind) -> &'static Service {
    match kind {
        ServiceKind::Mobile => &SERVICES[0],
        ServiceKind::Web => &SERVICES[1],
        ServiceKind::Social => &SERVICES[2],
    }
}

pub const BUSINESS_TYPES: &[&str] = &[
    "Restaurante",
    "Tienda",
    "Salón de belleza",
    "Clínica",
    "Hotel",
    "Servicios profesionales",
    "Educación",
    "Otro",
];

pub const SERVICE_TYPES: &[&str] = &[
    "Aplicación móvil",
    "Página web",
    "Gestión de redes sociales",
    "Diseño de marca",
    "Asesoría digital",
];

pub const HERO_TITLE: &str = "Transformamos tu visión en realidad digital";
pub const HERO_DESCRIPTION: &str = "Impulsamos negocios locales con páginas web, aplicaciones \
    móviles y contenido para redes sociales que conectan con sus clientes.";
pub const HERO_STATS: [(&str, &str); 4] = [
    ("100+", "Proyectos Base"),
    ("24/7", "Soporte"),
    ("99%", "Uptime"),
    ("GLOBAL", "Alcance"),
];

pub const ABOUT_TITLE: &str = "Sobre Nosotros";
pub const ABOUT_SUBTITLE: &str = "Visión • Innovación • Tecnología";
pub const ABOUT_DESCRIPTION: &str = "VISONIXRO es una agencia de servicios digitales que \
    acompaña a pequeñas y medianas empresas en su transformación tecnológica.";
pub const MISSION: &str = "Llevar soluciones digitales accesibles y de calidad a cada negocio, \
    ayudándoles a crecer en un mundo conectado.";
pub const VISION: &str = "Ser la agencia digital de referencia para los emprendedores de la \
    región, reconocida por su creatividad y compromiso.";

pub const CEO_NAME: &str = "Miguel Ángel Romero Guillén";
pub const CEO_ROLE: &str = "CEO & Developer";
pub const CEO_SUMMARY: &str = "Fundador de VISONIXRO, desarrollador y diseñador apasionado por \
    la tecnología al servicio de los negocios locales.";
pub const CEO_BIOGRAPHY: &[&str] = &[
    "Miguel Ángel Romero Guillén es el fundador y director de VISONIXRO. Desde temprana edad \
     se interesó por la programación y el diseño, y convirtió esa curiosidad en una carrera \
     dedicada a crear soluciones digitales.",
    "Con experiencia en desarrollo web, aplicaciones móviles y estrategias de contenido, ha \
     acompañado a emprendedores de distintos sectores a dar sus primeros pasos en internet.",
    "Su enfoque combina la tecnología con una comprensión cercana de las necesidades de cada \
     cliente, buscando siempre resultados medibles y relaciones de largo plazo.",
];
pub const CEO_SKILLS: &[&str] = &[
    "Desarrollo web",
    "Aplicaciones móviles",
    "Diseño UI/UX",
    "Marketing digital",
    "Estrategia de marca",
];

pub const ADDRESS: &str = "La Ceiba, Atlántida, Honduras";
pub const HOURS: &str = "Lunes a Viernes: 8:00 a. m. - 5:00 p. m.";
pub const COORDINATES: (f64, f64) = (16.351817, -86.464353);

pub fn map_link() -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        COORDINATES.0, COORDINATES.1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_kind_has_copy() {
        for kind in ServiceKind::ALL {
            let s = service(kind);
            assert_eq!(s.kind, kind);
            assert!(!s.benefits.is_empty());
        }
    }

    #[test]
    fn map_link_uses_coordinates() {
        assert!(map_link().ends_with("query=16.351817,-86.464353"));
    }
}
