use crate::{
    error::{NetError, Result},
    loss::Loss,
    math::Matrix,
    network::Network,
    workspace::Workspace,
};

/// Backpropagation through a purely linear network.
///
/// Walks the layers from the output back to the input: the output gradient comes straight from the
/// loss, then `dW[i] = dA[i + 1] · A[i]ᵀ` and `dA[i] = W[i]ᵀ · dA[i + 1]`. With no activation
/// functions there is no pre-activation step. Rerunning it on the same workspace gives the same
/// result.
pub fn backprop(
    network: &Network,
    workspace: &mut Workspace,
    loss: &dyn Loss,
    y: &[f64],
) -> Result<()> {
    let Workspace {
        a,
        da,
        dw,
        loss: example_loss,
        ..
    } = workspace;
    let da = da.as_mut().ok_or(NetError::MissingBuffer("da"))?;
    let dw = dw.as_mut().ok_or(NetError::MissingBuffer("dw"))?;

    let out = network.hidden + 1;
    let (value, grad) = loss.vector(y, &a[out])?;
    *example_loss = value;
    da[out] = grad;

    for i in (0..out).rev() {
        dw[i] = Matrix::outer(&da[i + 1], &a[i]);
        da[i] = network.weights[i].transpose_mul_vec(&da[i + 1]);
    }

    Ok(())
}
