//! Typ einer Zelle: einfaches Gleis oder eine der Weichen-Arten.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// Bestimmt, ob und wie der [`Zustand`](crate::zustand::Zustand) einer Zelle
/// beim [`Befahren`](crate::zelle::Zelle::befahre) angepasst wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Sequence, Serialize, Deserialize)]
pub enum Typ {
    /// Gleis ohne bewegliche Teile; der Zustand wird nie verändert.
    #[default]
    Gleis,
    /// Weiche mit Rückstellfeder: Aufschneiden von einem Zweig aus verändert
    /// die Stellung nicht dauerhaft, die Zungen fallen in die aktuelle Stellung zurück.
    Rückfallweiche,
    /// Von Hand gestellte Weiche ohne Feder: Aufschneiden stellt sie dauerhaft
    /// auf den befahrenen Zweig um.
    Handweiche,
    /// Weiche, die bei jeder Einfahrt vom Stamm aus auf den anderen Zweig wechselt.
    /// Die Zweige sind nur als Ausfahrt gültig.
    Wechselweiche,
}
