//! Eine einzelne Zelle eines Gleis-Rasters.

use log::debug;
use serde::{Deserialize, Serialize};

use gleisraster_typen::{drehung::Drehung, himmelsrichtung::Himmelsrichtung};

use crate::{fehler::UngültigeEinfahrt, typ::Typ, variante::Variante, zustand::Zustand};

/// Eine Zelle des Gleis-Rasters.
///
/// Die Geometrie wird durch [`Variante`] in ungedrehten Koordinaten beschrieben
/// und über die [`Drehung`] in die tatsächliche Lage gebracht.
/// Alle Felder können nach der Erstellung direkt angepasst werden.
///
/// [`ausfahrt`](Zelle::ausfahrt) ist eine reine Abfrage,
/// [`befahre`](Zelle::befahre) stellt abhängig vom [`Typ`] zusätzlich den
/// [`Zustand`] auf den tatsächlich befahrenen Zweig um.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Zelle {
    /// Der Typ der Zelle: Gleis oder eine der Weichen-Arten.
    pub typ: Typ,
    /// Die ungedrehte Geometrie der Zelle.
    pub variante: Variante,
    /// Die Drehung der Geometrie gegenüber ihrer ungedrehten Lage.
    pub drehung: Drehung,
    /// Die aktuelle Weichen-Stellung.
    pub zustand: Zustand,
}

impl Zelle {
    /// Erstelle eine neue [`Zelle`].
    #[must_use]
    pub const fn neu(typ: Typ, variante: Variante, drehung: Drehung, zustand: Zustand) -> Zelle {
        Zelle { typ, variante, drehung, zustand }
    }

    /// Drehe die Zelle um die angegebene [`Drehung`] weiter,
    /// d.h. komponiere sie mit der aktuellen Drehung.
    pub fn drehe(&mut self, drehung: Drehung) {
        self.drehung *= drehung;
    }

    /// Die Himmelsrichtung, in der ein Fahrzeug die Zelle wieder verlässt,
    /// wenn es aus Richtung `einfahrt` einfährt. Reine Abfrage ohne Zustandsänderung.
    ///
    /// ## Errors
    ///
    /// [`UngültigeEinfahrt`], wenn die Geometrie in dieser Himmelsrichtung
    /// keinen befahrbaren Anschluss hat.
    pub fn ausfahrt(&self, einfahrt: Himmelsrichtung) -> Result<Himmelsrichtung, UngültigeEinfahrt> {
        let lokal = einfahrt * -self.drehung;
        let lokale_ausfahrt = lokale_ausfahrt(self.typ, self.variante, self.zustand, lokal)
            .ok_or(UngültigeEinfahrt {
                einfahrt,
                typ: self.typ,
                variante: self.variante,
                drehung: self.drehung,
            })?;
        Ok(lokale_ausfahrt * self.drehung)
    }

    /// Befahre die Zelle aus Richtung `einfahrt` und erhalte die Himmelsrichtung,
    /// in der das Fahrzeug sie wieder verlässt.
    ///
    /// Bei Weichen-Typen wird zusätzlich der [`Zustand`] angepasst:
    /// eine [`Handweiche`](Typ::Handweiche) wird durch Aufschneiden auf den
    /// befahrenen Zweig umgestellt, eine [`Wechselweiche`](Typ::Wechselweiche)
    /// wechselt bei jeder Einfahrt vom Stamm die Stellung.
    /// [`Gleis`](Typ::Gleis) und [`Rückfallweiche`](Typ::Rückfallweiche)
    /// behalten ihren Zustand.
    ///
    /// ## Errors
    ///
    /// [`UngültigeEinfahrt`], wenn die Geometrie in dieser Himmelsrichtung
    /// keinen befahrbaren Anschluss hat. Der Zustand bleibt dann unverändert.
    pub fn befahre(&mut self, einfahrt: Himmelsrichtung) -> Result<Himmelsrichtung, UngültigeEinfahrt> {
        let ausfahrt = self.ausfahrt(einfahrt)?;
        let lokal = einfahrt * -self.drehung;
        let neuer_zustand = match self.typ {
            // Gleise haben keine beweglichen Teile,
            // bei einer Rückfallweiche fallen die Zungen in die aktuelle Stellung zurück.
            Typ::Gleis | Typ::Rückfallweiche => None,
            Typ::Handweiche => befahrener_zweig(self.variante, lokal),
            Typ::Wechselweiche => (self.variante.ist_weiche()
                && lokal == Himmelsrichtung::Norden)
                .then(|| self.zustand.gewechselt()),
        };
        if let Some(zustand) = neuer_zustand {
            // Umstellen nur bei tatsächlicher Änderung (Aufschneiden ist idempotent).
            if zustand != self.zustand {
                debug!(
                    "{:?}-Zelle ({:?}) durch Befahren von {einfahrt:?} umgestellt: {:?} -> {zustand:?}.",
                    self.typ, self.variante, self.zustand,
                );
                self.zustand = zustand;
            }
        }
        Ok(ausfahrt)
    }
}

/// Die Ausfahrt in ungedrehten Koordinaten für eine Einfahrt aus Richtung `lokal`,
/// oder [`None`] wenn die Geometrie dort keinen befahrbaren Anschluss hat.
///
/// Der Stamm einer Weiche liegt in ungedrehten Koordinaten immer im Norden.
fn lokale_ausfahrt(
    typ: Typ,
    variante: Variante,
    zustand: Zustand,
    lokal: Himmelsrichtung,
) -> Option<Himmelsrichtung> {
    use Himmelsrichtung::{Norden, Osten, Süden, Westen};
    // Wechselweichen sind von den Zweigen aus nicht befahrbar.
    if typ == Typ::Wechselweiche && variante.ist_weiche() && lokal != Norden {
        return None;
    }
    match variante {
        Variante::Gerade => match lokal {
            Norden | Süden => Some(lokal.gegenüber()),
            Osten | Westen => None,
        },
        Variante::Kurve => match lokal {
            Norden => Some(Osten),
            Osten => Some(Norden),
            Süden | Westen => None,
        },
        Variante::Kreuzung => Some(lokal.gegenüber()),
        Variante::DoppelKurve => match lokal {
            Norden => Some(Osten),
            Osten => Some(Norden),
            Süden => Some(Westen),
            Westen => Some(Süden),
        },
        Variante::Links => match lokal {
            Norden => Some(match zustand {
                Zustand::LinkerZweig => Osten,
                Zustand::Ruhe | Zustand::RechterZweig => Süden,
            }),
            Osten | Süden => Some(Norden),
            Westen => None,
        },
        Variante::Rechts => match lokal {
            Norden => Some(match zustand {
                Zustand::RechterZweig => Westen,
                Zustand::Ruhe | Zustand::LinkerZweig => Süden,
            }),
            Süden | Westen => Some(Norden),
            Osten => None,
        },
        Variante::Symmetrisch => match lokal {
            Norden => Some(match zustand {
                Zustand::RechterZweig => Westen,
                Zustand::Ruhe | Zustand::LinkerZweig => Osten,
            }),
            Osten | Westen => Some(Norden),
            Süden => None,
        },
    }
}

/// Der Zweig, über den eine Weiche bei Einfahrt aus Richtung `lokal` aufgeschnitten wird.
///
/// [`None`] für Einfahrten vom Stamm und für Varianten ohne Zweige;
/// die gerade Durchfahrt von [`Links`](Variante::Links)/[`Rechts`](Variante::Rechts)
/// zählt als ihr jeweils zweiter Zweig.
fn befahrener_zweig(variante: Variante, lokal: Himmelsrichtung) -> Option<Zustand> {
    use Himmelsrichtung::{Norden, Osten, Süden, Westen};
    match variante {
        Variante::Links => match lokal {
            Osten => Some(Zustand::LinkerZweig),
            Süden => Some(Zustand::RechterZweig),
            Norden | Westen => None,
        },
        Variante::Rechts => match lokal {
            Süden => Some(Zustand::LinkerZweig),
            Westen => Some(Zustand::RechterZweig),
            Norden | Osten => None,
        },
        Variante::Symmetrisch => match lokal {
            Osten => Some(Zustand::LinkerZweig),
            Westen => Some(Zustand::RechterZweig),
            Norden | Süden => None,
        },
        Variante::Gerade | Variante::Kurve | Variante::Kreuzung | Variante::DoppelKurve => None,
    }
}
