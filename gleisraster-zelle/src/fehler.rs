//! Fehler beim Befahren einer Zelle.

use thiserror::Error;

use gleisraster_typen::{drehung::Drehung, himmelsrichtung::Himmelsrichtung};

use crate::{typ::Typ, variante::Variante};

/// Die Zelle hat in der angefragten Himmelsrichtung keinen befahrbaren Anschluss,
/// z.B. die Einfahrt von der Seite in ein gerades Gleis.
///
/// Der Fehler wird nie intern behandelt: der Aufrufer entscheidet,
/// ob von hier aus schlicht keine Weiterfahrt möglich ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Einfahrt von {einfahrt:?} ist bei {typ:?} ({variante:?}, {drehung:?}) nicht möglich!")]
pub struct UngültigeEinfahrt {
    /// Die Himmelsrichtung, aus der die Einfahrt versucht wurde.
    pub einfahrt: Himmelsrichtung,
    /// Der Typ der Zelle.
    pub typ: Typ,
    /// Die Geometrie der Zelle.
    pub variante: Variante,
    /// Die Drehung der Zelle.
    pub drehung: Drehung,
}
