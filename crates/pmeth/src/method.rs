//! Key method tables and registration.
//!
//! A [`PkeyMethod`] is the operation table a public-key framework calls
//! into. Operations a method does not provide keep the default body and fail
//! with [`PmethError::OperationNotSupported`]. [`PkeyCtx`] is the host-side
//! operation handle that owns the attached key and the method's state.

use std::fmt;
use std::sync::Arc;

use gostpk_core::{DigestCtx, NameRegistry, Nid, ObjectRegistry, PKey, PmethConfig};

use crate::backend::GostBackend;
use crate::context::GostPmethData;
use crate::ctrl::{Ctrl, CtrlReply};
use crate::error::{report, PmethError, PmethResult};
use crate::family::{family_of, Family};
use crate::keygen;
use crate::mac::MacPmethData;
use crate::params::Handled;
use crate::sign;

/// Operation table of a key method.
pub trait PkeyMethod {
    /// Per-operation state.
    type Data;

    /// Algorithm id this method is registered under.
    fn id(&self) -> Nid;

    fn init(&self, key: Option<&PKey>) -> PmethResult<Self::Data>;

    fn copy(&self, src: &Self::Data) -> PmethResult<Self::Data>;

    fn ctrl(
        &self,
        data: &mut Self::Data,
        key: Option<&PKey>,
        request: Ctrl<'_>,
    ) -> PmethResult<CtrlReply>;

    fn ctrl_str(
        &self,
        data: &mut Self::Data,
        key: Option<&PKey>,
        name: &str,
        value: Option<&str>,
    ) -> PmethResult<Handled>;

    fn paramgen_init(&self, _data: &mut Self::Data) -> PmethResult<()> {
        Err(PmethError::OperationNotSupported)
    }

    fn paramgen(&self, _data: &Self::Data) -> PmethResult<PKey> {
        Err(PmethError::OperationNotSupported)
    }

    fn keygen(&self, _data: &Self::Data) -> PmethResult<PKey> {
        Err(PmethError::OperationNotSupported)
    }

    fn sign(
        &self,
        _data: &Self::Data,
        _key: Option<&PKey>,
        _out: Option<&mut [u8]>,
        _digest: &[u8],
    ) -> PmethResult<usize> {
        Err(PmethError::OperationNotSupported)
    }

    fn verify(
        &self,
        _data: &Self::Data,
        _key: Option<&PKey>,
        _signature: Option<&[u8]>,
        _digest: &[u8],
    ) -> PmethResult<bool> {
        Err(PmethError::OperationNotSupported)
    }

    fn encrypt_init(&self, _data: &mut Self::Data) -> PmethResult<()> {
        Err(PmethError::OperationNotSupported)
    }

    fn derive_init(&self, _data: &mut Self::Data) -> PmethResult<()> {
        Err(PmethError::OperationNotSupported)
    }

    fn signctx_init(&self, _data: &mut Self::Data, _mctx: &mut dyn DigestCtx) -> PmethResult<()> {
        Err(PmethError::OperationNotSupported)
    }

    fn signctx(
        &self,
        _data: &Self::Data,
        _out: Option<&mut [u8]>,
        _mctx: &mut dyn DigestCtx,
    ) -> PmethResult<usize> {
        Err(PmethError::OperationNotSupported)
    }
}

/// One of the asymmetric GOST R 34.10 methods.
#[derive(Clone)]
pub struct GostPkeyMethod {
    family: &'static Family,
    backend: Arc<dyn GostBackend>,
    registry: Arc<dyn NameRegistry>,
}

impl GostPkeyMethod {
    /// Method for `algorithm`, resolving parameter-set names with the
    /// built-in registry.
    pub fn new(algorithm: Nid, backend: Arc<dyn GostBackend>) -> PmethResult<Self> {
        Self::with_registry(algorithm, backend, Arc::new(ObjectRegistry::builtin()))
    }

    pub fn with_registry(
        algorithm: Nid,
        backend: Arc<dyn GostBackend>,
        registry: Arc<dyn NameRegistry>,
    ) -> PmethResult<Self> {
        let family = family_of(algorithm).ok_or(PmethError::UnsupportedMethod(algorithm))?;
        Ok(Self {
            family,
            backend,
            registry,
        })
    }

    pub fn family(&self) -> &'static Family {
        self.family
    }
}

impl fmt::Debug for GostPkeyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GostPkeyMethod")
            .field("algorithm", &self.family.algorithm)
            .finish_non_exhaustive()
    }
}

impl PkeyMethod for GostPkeyMethod {
    type Data = GostPmethData;

    fn id(&self) -> Nid {
        self.family.algorithm
    }

    fn init(&self, key: Option<&PKey>) -> PmethResult<GostPmethData> {
        GostPmethData::new(key)
    }

    fn copy(&self, src: &GostPmethData) -> PmethResult<GostPmethData> {
        src.duplicate()
    }

    fn ctrl(
        &self,
        data: &mut GostPmethData,
        key: Option<&PKey>,
        request: Ctrl<'_>,
    ) -> PmethResult<CtrlReply> {
        data.ctrl(key, request)
    }

    fn ctrl_str(
        &self,
        data: &mut GostPmethData,
        key: Option<&PKey>,
        name: &str,
        value: Option<&str>,
    ) -> PmethResult<Handled> {
        data.ctrl_str(self.family, self.registry.as_ref(), key, name, value)
    }

    fn paramgen_init(&self, _data: &mut GostPmethData) -> PmethResult<()> {
        Ok(())
    }

    fn paramgen(&self, data: &GostPmethData) -> PmethResult<PKey> {
        keygen::paramgen(self.family, data, self.backend.as_ref())
    }

    fn keygen(&self, data: &GostPmethData) -> PmethResult<PKey> {
        keygen::keygen(self.family, data, self.backend.as_ref())
    }

    fn sign(
        &self,
        _data: &GostPmethData,
        key: Option<&PKey>,
        out: Option<&mut [u8]>,
        digest: &[u8],
    ) -> PmethResult<usize> {
        sign::sign(key, self.backend.as_ref(), out, digest)
    }

    fn verify(
        &self,
        _data: &GostPmethData,
        key: Option<&PKey>,
        signature: Option<&[u8]>,
        digest: &[u8],
    ) -> PmethResult<bool> {
        Ok(sign::verify(key, self.backend.as_ref(), signature, digest))
    }

    fn encrypt_init(&self, _data: &mut GostPmethData) -> PmethResult<()> {
        Ok(())
    }

    fn derive_init(&self, _data: &mut GostPmethData) -> PmethResult<()> {
        Ok(())
    }
}

/// One of the two GOST 28147-89 MAC methods.
#[derive(Debug, Clone, Copy)]
pub struct GostMacMethod {
    algorithm: Nid,
}

impl GostMacMethod {
    pub fn new(algorithm: Nid) -> PmethResult<Self> {
        match algorithm {
            Nid::GOST28147_89_MAC | Nid::GOST_MAC_12 => Ok(Self { algorithm }),
            other => Err(PmethError::UnsupportedMethod(other)),
        }
    }
}

impl PkeyMethod for GostMacMethod {
    type Data = MacPmethData;

    fn id(&self) -> Nid {
        self.algorithm
    }

    fn init(&self, _key: Option<&PKey>) -> PmethResult<MacPmethData> {
        Ok(MacPmethData::new())
    }

    fn copy(&self, src: &MacPmethData) -> PmethResult<MacPmethData> {
        Ok(src.duplicate())
    }

    fn ctrl(
        &self,
        data: &mut MacPmethData,
        key: Option<&PKey>,
        request: Ctrl<'_>,
    ) -> PmethResult<CtrlReply> {
        data.ctrl(key, request)
    }

    fn ctrl_str(
        &self,
        data: &mut MacPmethData,
        _key: Option<&PKey>,
        name: &str,
        value: Option<&str>,
    ) -> PmethResult<Handled> {
        data.ctrl_str(name, value)
    }

    fn keygen(&self, data: &MacPmethData) -> PmethResult<PKey> {
        data.keygen(self.algorithm)
    }

    fn signctx_init(&self, _data: &mut MacPmethData, _mctx: &mut dyn DigestCtx) -> PmethResult<()> {
        Ok(())
    }

    fn signctx(
        &self,
        data: &MacPmethData,
        out: Option<&mut [u8]>,
        mctx: &mut dyn DigestCtx,
    ) -> PmethResult<usize> {
        data.signctx(out, mctx)
    }
}

/// Host operation handle: a method, the key attached to the operation and
/// the method's state.
pub struct PkeyCtx<M: PkeyMethod> {
    method: M,
    pkey: Option<PKey>,
    data: Option<M::Data>,
}

impl<M: PkeyMethod> PkeyCtx<M> {
    /// Opens an operation, running the method's `init`.
    pub fn new(method: M, pkey: Option<PKey>) -> PmethResult<Self> {
        let data = method.init(pkey.as_ref())?;
        Ok(Self {
            method,
            pkey,
            data: Some(data),
        })
    }

    pub fn method(&self) -> &M {
        &self.method
    }

    pub fn key(&self) -> Option<&PKey> {
        self.pkey.as_ref()
    }

    pub fn data(&self) -> Option<&M::Data> {
        self.data.as_ref()
    }

    /// Attaches a key to the operation. The rest of the state is kept.
    pub fn attach_key(&mut self, pkey: PKey) {
        self.pkey = Some(pkey);
    }

    /// Releases the method state. Safe to call more than once.
    pub fn cleanup(&mut self) {
        self.data = None;
    }

    fn state(&self) -> PmethResult<&M::Data> {
        self.data
            .as_ref()
            .ok_or_else(|| report("pkey_ctx", PmethError::MissingContext))
    }

    fn parts_mut(&mut self) -> PmethResult<(&M, Option<&PKey>, &mut M::Data)> {
        let data = self
            .data
            .as_mut()
            .ok_or_else(|| report("pkey_ctx", PmethError::MissingContext))?;
        Ok((&self.method, self.pkey.as_ref(), data))
    }

    pub fn ctrl(&mut self, request: Ctrl<'_>) -> PmethResult<CtrlReply> {
        let (method, key, data) = self.parts_mut()?;
        method.ctrl(data, key, request)
    }

    pub fn ctrl_str(&mut self, name: &str, value: Option<&str>) -> PmethResult<Handled> {
        let (method, key, data) = self.parts_mut()?;
        method.ctrl_str(data, key, name, value)
    }

    pub fn paramgen_init(&mut self) -> PmethResult<()> {
        let (method, _, data) = self.parts_mut()?;
        method.paramgen_init(data)
    }

    pub fn paramgen(&self) -> PmethResult<PKey> {
        self.method.paramgen(self.state()?)
    }

    pub fn keygen(&self) -> PmethResult<PKey> {
        self.method.keygen(self.state()?)
    }

    pub fn sign(&self, out: Option<&mut [u8]>, digest: &[u8]) -> PmethResult<usize> {
        self.method
            .sign(self.state()?, self.pkey.as_ref(), out, digest)
    }

    pub fn verify(&self, signature: Option<&[u8]>, digest: &[u8]) -> PmethResult<bool> {
        self.method
            .verify(self.state()?, self.pkey.as_ref(), signature, digest)
    }

    pub fn encrypt_init(&mut self) -> PmethResult<()> {
        let (method, _, data) = self.parts_mut()?;
        method.encrypt_init(data)
    }

    pub fn derive_init(&mut self) -> PmethResult<()> {
        let (method, _, data) = self.parts_mut()?;
        method.derive_init(data)
    }

    pub fn signctx_init(&mut self, mctx: &mut dyn DigestCtx) -> PmethResult<()> {
        let (method, _, data) = self.parts_mut()?;
        method.signctx_init(data, mctx)
    }

    pub fn signctx(&self, out: Option<&mut [u8]>, mctx: &mut dyn DigestCtx) -> PmethResult<usize> {
        self.method.signctx(self.state()?, out, mctx)
    }
}

impl<M: PkeyMethod + Clone> PkeyCtx<M> {
    /// Duplicates the operation through the method's `copy`.
    pub fn try_clone(&self) -> PmethResult<Self> {
        let data = self.method.copy(self.state()?)?;
        Ok(Self {
            method: self.method.clone(),
            pkey: self.pkey.clone(),
            data: Some(data),
        })
    }
}

/// A method returned by registration.
#[derive(Debug, Clone)]
pub enum RegisteredMethod {
    Asymmetric(GostPkeyMethod),
    Mac(GostMacMethod),
}

impl RegisteredMethod {
    pub fn id(&self) -> Nid {
        match self {
            RegisteredMethod::Asymmetric(method) => method.id(),
            RegisteredMethod::Mac(method) => method.id(),
        }
    }
}

/// Builds the method for one of the six GOST algorithm ids.
pub fn register_pmeth(
    id: Nid,
    backend: Arc<dyn GostBackend>,
    registry: Arc<dyn NameRegistry>,
) -> PmethResult<RegisteredMethod> {
    let method = match id {
        Nid::GOST28147_89_MAC | Nid::GOST_MAC_12 => RegisteredMethod::Mac(GostMacMethod::new(id)?),
        _ if family_of(id).is_some() => {
            RegisteredMethod::Asymmetric(GostPkeyMethod::with_registry(id, backend, registry)?)
        }
        other => return Err(report("register_pmeth", PmethError::UnsupportedMethod(other))),
    };
    tracing::info!(method = %id, "key method registered");
    Ok(method)
}

/// Registers every method enabled in `config`, in configuration order.
pub fn register_all(
    config: &PmethConfig,
    backend: Arc<dyn GostBackend>,
    registry: Arc<dyn NameRegistry>,
) -> PmethResult<Vec<RegisteredMethod>> {
    config
        .methods
        .iter()
        .map(|name| {
            let id = registry.txt2nid(name).ok_or_else(|| {
                report("register_all", PmethError::UnknownMethodName(name.clone()))
            })?;
            register_pmeth(id, Arc::clone(&backend), Arc::clone(&registry))
        })
        .collect()
}
