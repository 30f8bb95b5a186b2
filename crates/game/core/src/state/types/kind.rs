bitflags::bitflags! {
    /// Orthogonal capabilities of an entity.
    ///
    /// An entity may be an NPC, a player character, attackable and/or
    /// criminal in any combination.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EntityKind: u8 {
        const NPC = 1 << 0;
        const CHARACTER = 1 << 1;
        const ATTACKABLE = 1 << 2;
        const CRIMINAL = 1 << 3;
    }
}

impl EntityKind {
    pub fn is_npc(self) -> bool {
        self.contains(Self::NPC)
    }

    pub fn is_character(self) -> bool {
        self.contains(Self::CHARACTER)
    }

    pub fn is_criminal(self) -> bool {
        self.contains(Self::CRIMINAL)
    }

    /// Returns true if an entity of this kind may attack an entity of kind `target`.
    ///
    /// NPCs only fight characters. Players fight characters and NPCs
    /// flagged attackable.
    pub fn may_attack(self, target: EntityKind) -> bool {
        if self.is_npc() {
            return target.is_character();
        }
        target.is_character() || (target.is_npc() && target.contains(Self::ATTACKABLE))
    }
}
